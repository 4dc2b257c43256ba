//! Stack and Subroutine Unit.
//!
//! The stack lives in main memory and grows downward from the address held in
//! `R7`. This module implements:
//! 1. **Push/Pop:** Decrement-then-store and load-then-increment on `R7`.
//! 2. **Call/Return:** Return-address linkage through the same stack.
//!
//! Stack pointer arithmetic wraps modulo 256, so overflow and underflow walk
//! around the address space instead of leaving it. Neither is detected.

use crate::common::error::CpuError;
use crate::core::cpu::Cpu;
use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes as op;
use crate::soc::console::Console;

impl<C: Console> Cpu<C> {
    /// Pushes a byte: decrements SP, then stores `val` at `memory[SP]`.
    pub fn push_value(&mut self, val: u8) {
        let sp = self.regs.sp().wrapping_sub(1);
        self.regs.set_sp(sp);
        self.ram.write(sp, val);
        self.stats.observe_stack(self.initial_sp, sp);
    }

    /// Pops a byte: reads `memory[SP]`, then increments SP.
    pub fn pop_value(&mut self) -> u8 {
        let sp = self.regs.sp();
        let val = self.ram.read(sp);
        self.regs.set_sp(sp.wrapping_add(1));
        val
    }

    /// `PUSH reg`: pushes the value of `reg`. The register itself is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::InvalidRegister`] for an index outside `R0`-`R7`.
    pub fn push(&mut self, reg: u8) -> Result<(), CpuError> {
        let val = self.regs.read(reg)?;
        self.push_value(val);
        Ok(())
    }

    /// `POP reg`: copies the top of the stack into `reg`, then increments SP.
    ///
    /// The destination is written before SP moves, so `POP R7` leaves SP one
    /// past the popped value.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::InvalidRegister`] for an index outside `R0`-`R7`;
    /// no state changes in that case.
    pub fn pop(&mut self, reg: u8) -> Result<(), CpuError> {
        let val = self.ram.read(self.regs.sp());
        self.regs.write(reg, val)?;
        self.regs.set_sp(self.regs.sp().wrapping_add(1));
        Ok(())
    }

    /// `CALL reg`: pushes the address of the next instruction, then jumps to
    /// the address held in `reg`.
    ///
    /// The target is read after the push, so `CALL R7` lands on the
    /// decremented stack pointer.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::InvalidRegister`] for an index outside `R0`-`R7`;
    /// no state changes in that case.
    pub fn call(&mut self, reg: u8) -> Result<(), CpuError> {
        let _ = self.regs.read(reg)?;
        let return_addr = self.pc.wrapping_add(op::CALL.width());
        self.push_value(return_addr);
        self.pc = self.regs.read(reg)?;
        self.branch_taken = true;
        Ok(())
    }

    /// `RET`: pops the return address into PC.
    pub fn ret(&mut self) {
        self.pc = self.pop_value();
        self.branch_taken = true;
    }
}
