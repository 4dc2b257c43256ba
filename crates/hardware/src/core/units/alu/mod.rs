//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the register-to-register ALU. It handles:
//! - [`arithmetic`]: `ADD` and `MUL`, written back to the first register.
//! - comparison: `CMP`, which only sets the flag register.
//!
//! ALU instructions carry their operation in the low four bits of the opcode
//! (`ADD=0000`, `MUL=0010`, `CMP=0111`); the `TryFrom<u8>` impl on [`AluOp`] decodes them.

/// Integer arithmetic operations (add, multiply).
pub mod arithmetic;

use crate::common::error::CpuError;
use crate::common::reg::RegisterFile;
use crate::core::arch::flags::Flags;

/// Selector value for `ADD`.
pub const SEL_ADD: u8 = 0b0000;
/// Selector value for `MUL`.
pub const SEL_MUL: u8 = 0b0010;
/// Selector value for `CMP`.
pub const SEL_CMP: u8 = 0b0111;

/// Operations the ALU implements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// `regA <- regA + regB`
    Add,
    /// `regA <- regA * regB`
    Mul,
    /// Compare `regA` with `regB` and set `FL`.
    Cmp,
}

impl TryFrom<u8> for AluOp {
    type Error = CpuError;

    fn try_from(selector: u8) -> Result<Self, Self::Error> {
        match selector {
            SEL_ADD => Ok(Self::Add),
            SEL_MUL => Ok(Self::Mul),
            SEL_CMP => Ok(Self::Cmp),
            other => Err(CpuError::UnsupportedAluOperation(other)),
        }
    }
}

/// Arithmetic Logic Unit.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation on two registers.
    ///
    /// `ADD` and `MUL` overwrite `reg_a`; `CMP` leaves both registers alone and
    /// sets exactly one flag bit.
    ///
    /// # Arguments
    ///
    /// * `op`    - The operation to perform.
    /// * `regs`  - Register file holding the operands.
    /// * `flags` - Flag register updated by `CMP`.
    /// * `reg_a` - Index of the first (destination) register.
    /// * `reg_b` - Index of the second register.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::InvalidRegister`] if either index is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::common::RegisterFile;
    /// use ls8_core::core::arch::Flags;
    /// use ls8_core::core::units::alu::{Alu, AluOp};
    ///
    /// let mut regs = RegisterFile::new();
    /// let mut flags = Flags::default();
    /// regs.write(0, 8).unwrap();
    /// regs.write(1, 9).unwrap();
    ///
    /// Alu::execute(AluOp::Mul, &mut regs, &mut flags, 0, 1).unwrap();
    /// assert_eq!(regs.read(0).unwrap(), 72);
    ///
    /// Alu::execute(AluOp::Cmp, &mut regs, &mut flags, 0, 1).unwrap();
    /// assert!(flags.greater());
    /// ```
    pub fn execute(
        op: AluOp,
        regs: &mut RegisterFile,
        flags: &mut Flags,
        reg_a: u8,
        reg_b: u8,
    ) -> Result<(), CpuError> {
        let a = regs.read(reg_a)?;
        let b = regs.read(reg_b)?;

        match arithmetic::execute(op, a, b) {
            Some(result) => regs.write(reg_a, result),
            None => {
                flags.set_compare(a.cmp(&b));
                Ok(())
            }
        }
    }

    /// Decodes an ALU selector and executes it.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::UnsupportedAluOperation`] for a selector outside
    /// `ADD`, `MUL`, `CMP`, or [`CpuError::InvalidRegister`] for a bad operand.
    pub fn execute_selector(
        selector: u8,
        regs: &mut RegisterFile,
        flags: &mut Flags,
        reg_a: u8,
        reg_b: u8,
    ) -> Result<(), CpuError> {
        let op = AluOp::try_from(selector)?;
        Self::execute(op, regs, flags, reg_a, reg_b)
    }
}
