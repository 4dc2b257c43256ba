//! ALU arithmetic operations.
//!
//! Registers are eight bits wide; results wrap modulo 256.

use crate::core::units::alu::AluOp;

/// Executes an arithmetic operation on two register values.
///
/// # Returns
///
/// The wrapped 8-bit result, or `None` for non-arithmetic operations.
pub fn execute(op: AluOp, a: u8, b: u8) -> Option<u8> {
    match op {
        AluOp::Add => Some(a.wrapping_add(b)),
        AluOp::Mul => Some(a.wrapping_mul(b)),
        AluOp::Cmp => None,
    }
}
