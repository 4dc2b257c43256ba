//! Control-Flow Unit.
//!
//! Jumps take their target from a register. Conditional jumps consult only the
//! Equal bit of `FL`.

use crate::common::error::CpuError;
use crate::core::cpu::Cpu;
use crate::soc::console::Console;

impl<C: Console> Cpu<C> {
    /// `JMP reg`: sets PC to the value of `reg`.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::InvalidRegister`] for an index outside `R0`-`R7`.
    pub fn jump(&mut self, reg: u8) -> Result<(), CpuError> {
        self.pc = self.regs.read(reg)?;
        self.branch_taken = true;
        Ok(())
    }

    /// Jumps to the value of `reg` when `condition` holds, otherwise falls
    /// through to the next instruction.
    ///
    /// The register is only read when the jump is taken.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::InvalidRegister`] if the jump is taken and `reg` is
    /// outside `R0`-`R7`.
    pub fn jump_if(&mut self, reg: u8, condition: bool) -> Result<(), CpuError> {
        if condition {
            self.jump(reg)
        } else {
            self.advance_pc();
            Ok(())
        }
    }
}
