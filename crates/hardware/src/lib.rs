//! LS-8 virtual CPU library.
//!
//! This crate implements an 8-bit instructional CPU with the following:
//! 1. **Core:** 256 bytes of memory, eight registers (`R7` = stack pointer), PC, flags.
//! 2. **Dispatch:** A 256-entry opcode branch table driving fetch-decode-execute.
//! 3. **Units:** ALU (add, multiply, compare), stack and subroutine linkage, conditional jumps.
//! 4. **ISA:** Opcode table, encoding fields, and a disassembler.
//! 5. **Simulation:** Text program loader, configuration, and statistics.
//!
//! # Example
//!
//! ```
//! use ls8_core::config::Config;
//! use ls8_core::core::Cpu;
//! use ls8_core::sim::loader::parse_program;
//! use ls8_core::soc::BufferConsole;
//!
//! let image = parse_program(
//!     "10000010\n00000000\n00001000\n\
//!      10000010\n00000001\n00001001\n\
//!      10100010\n00000000\n00000001\n\
//!      01000111\n00000000\n\
//!      00000001\n",
//! )
//! .unwrap();
//!
//! let mut cpu = Cpu::with_console(BufferConsole::new(), &Config::default());
//! cpu.load(&image).unwrap();
//! cpu.run().unwrap();
//! assert_eq!(cpu.console().values(), &[72]);
//! ```

/// Common types and constants (registers, errors, machine dimensions).
pub mod common;
/// Emulator configuration.
pub mod config;
/// CPU core (state, dispatch, ALU, stack, control flow).
pub mod core;
/// Instruction set (opcodes, encoding fields, disassembler).
pub mod isa;
/// Program loader and simulator wrapper.
pub mod sim;
/// Attached devices (console).
pub mod soc;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type.
pub use crate::core::Cpu;
/// CPU plus run policy.
pub use crate::sim::Simulator;
