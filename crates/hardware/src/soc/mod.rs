//! Devices attached to the CPU.
//!
//! The LS-8 has a single output device, the console used by `PRN`.

/// Console output device.
pub mod console;

pub use console::{BufferConsole, Console, StdoutConsole};
