//! Console output device.
//!
//! `PRN` hands each printed value to a [`Console`]. Two implementations are
//! provided:
//! 1. **`StdoutConsole`:** Writes each value in decimal, one per line, to stdout.
//! 2. **`BufferConsole`:** Records the values in memory for tests and embedders.

use std::io::{self, Write};

/// Sink for values printed by the CPU.
pub trait Console {
    /// Emits one register value.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by the underlying output.
    fn emit(&mut self, value: u8) -> io::Result<()>;
}

/// Console writing decimal lines to standard output.
#[derive(Debug, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn emit(&mut self, value: u8) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{value}")?;
        out.flush()
    }
}

/// Console that keeps every emitted value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BufferConsole {
    values: Vec<u8>,
}

impl BufferConsole {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Values emitted so far, in order.
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// The output as `StdoutConsole` would have printed it.
    pub fn text(&self) -> String {
        self.values.iter().map(|v| format!("{v}\n")).collect()
    }
}

impl Console for BufferConsole {
    fn emit(&mut self, value: u8) -> io::Result<()> {
        self.values.push(value);
        Ok(())
    }
}
