//! Error definitions.
//!
//! This module defines every failure the emulator can surface. It provides:
//! 1. **Execution Errors:** Fatal conditions raised by the fetch-decode-execute loop.
//! 2. **Load Errors:** Problems reading or parsing a text program image.
//!
//! None of these are recoverable in-core: the CPU stops at the first error and
//! hands it back to the caller with enough context (PC, opcode, line) to report it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions raised while executing a program.
#[derive(Debug, Error)]
pub enum CpuError {
    /// The byte at `pc` has no entry in the dispatch table.
    #[error("invalid opcode {opcode:#010b} ({opcode:#04x}) at pc {pc:#04x}")]
    InvalidOpcode {
        /// Address of the offending instruction.
        pc: u8,
        /// The unmapped opcode byte.
        opcode: u8,
    },

    /// The ALU was asked to run an operation selector it does not implement.
    #[error("unsupported ALU operation {0:#06b}")]
    UnsupportedAluOperation(u8),

    /// An operand named a register outside `R0`-`R7`.
    #[error("register index {0} out of range")]
    InvalidRegister(u8),

    /// Loading the program image failed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Writing to the console failed.
    #[error("console write failed: {0}")]
    Io(#[from] io::Error),
}

/// Problems reading or parsing a text program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file does not exist.
    #[error("{} not found", path.display())]
    ProgramNotFound {
        /// Path as given by the caller.
        path: PathBuf,
    },

    /// The program file exists but could not be read.
    #[error("could not read {}: {source}", path.display())]
    Io {
        /// Path as given by the caller.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A line did not contain an 8-bit binary literal.
    #[error("line {line}: invalid binary literal '{text}'")]
    InvalidLiteral {
        /// One-based line number in the source text.
        line: usize,
        /// The offending text with comments and whitespace stripped.
        text: String,
    },

    /// The image does not fit in memory.
    #[error("program is {len} bytes but memory holds {capacity}")]
    ProgramTooLarge {
        /// Number of bytes in the image.
        len: usize,
        /// Memory capacity in bytes.
        capacity: usize,
    },
}
