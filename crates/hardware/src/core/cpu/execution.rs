//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle. It performs the following:
//! 1. **Fetch:** Reads the opcode at PC and, unconditionally, the two bytes after it.
//! 2. **Dispatch:** Looks the opcode up in the branch table and runs its handler.
//! 3. **Accounting:** Records the retired instruction in the statistics.
//! 4. **Observability:** Emits trace lines and `tracing` events.

use tracing::{debug, trace};

use super::Cpu;
use crate::common::error::CpuError;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::{Instruction, InstructionBits};
use crate::soc::console::Console;

impl<C: Console> Cpu<C> {
    /// Reads the instruction at PC.
    ///
    /// Operand addresses wrap past `0xFF`, so both operand bytes are always
    /// readable regardless of how many the opcode uses.
    pub const fn fetch(&self) -> Instruction {
        let pc = self.pc;
        Instruction {
            pc,
            opcode: self.ram.read(pc),
            operand_a: self.ram.read(pc.wrapping_add(1)),
            operand_b: self.ram.read(pc.wrapping_add(2)),
        }
    }

    /// Moves PC past the instruction in `IR` using its encoded width.
    #[inline]
    pub fn advance_pc(&mut self) {
        self.pc = self.pc.wrapping_add(self.ir.width());
    }

    /// Executes exactly one instruction.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::InvalidOpcode`] if PC points at an unmapped byte,
    /// or whatever error the instruction's handler raised. PC is not advanced
    /// past a failing instruction.
    pub fn step(&mut self) -> Result<(), CpuError> {
        let inst = self.fetch();

        if self.trace {
            eprintln!("{}", self.snapshot());
        }

        let handler = self
            .dispatch
            .lookup(inst.opcode)
            .ok_or(CpuError::InvalidOpcode {
                pc: inst.pc,
                opcode: inst.opcode,
            })?;

        trace!(
            pc = inst.pc,
            opcode = inst.opcode,
            "{}",
            disassemble(inst.opcode, inst.operand_a, inst.operand_b)
        );

        self.ir = inst.opcode;
        self.branch_taken = false;
        handler(self, inst.operand_a, inst.operand_b)?;

        self.stats.record(inst.opcode, self.branch_taken);
        Ok(())
    }

    /// Runs until `HLT` clears the running flag.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error raised by [`Cpu::step`].
    pub fn run(&mut self) -> Result<(), CpuError> {
        while self.running {
            self.step()?;
        }
        debug!(
            pc = self.pc,
            instructions = self.stats.instructions_retired,
            "halted"
        );
        Ok(())
    }
}
