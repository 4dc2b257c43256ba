//! Core processor implementation.
//!
//! This module contains the CPU: its architectural state, the ALU, and the
//! orchestrator that fetches, dispatches and executes instructions.

/// Architectural state (memory, flag register).
pub mod arch;

/// CPU core implementation and execution loop.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
