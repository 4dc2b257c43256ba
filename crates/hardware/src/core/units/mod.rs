//! Execution units.
//!
//! The LS-8 has a single functional unit outside the control logic: the
//! register-to-register ALU.

/// Arithmetic Logic Unit (add, multiply, compare).
pub mod alu;
