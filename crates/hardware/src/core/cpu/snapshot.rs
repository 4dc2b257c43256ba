//! CPU state snapshots.
//!
//! A [`Snapshot`] captures PC, `FL`, the three bytes at PC and all registers
//! without touching the CPU. Its `Display` form is the classic one-line trace:
//!
//! ```text
//! TRACE: 00 | 82 00 08 | 00 00 00 00 00 00 00 F4
//! ```

use std::fmt;

use serde::Serialize;

use crate::common::constants::REGISTER_COUNT;
use crate::core::arch::Flags;
use crate::core::cpu::Cpu;
use crate::soc::console::Console;

/// Point-in-time view of the CPU.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Program counter.
    pub pc: u8,
    /// Flag register.
    pub fl: Flags,
    /// Memory at `pc`, `pc + 1`, `pc + 2`.
    pub ir: [u8; 3],
    /// Registers `R0`-`R7`.
    pub regs: [u8; REGISTER_COUNT],
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            self.pc, self.ir[0], self.ir[1], self.ir[2]
        )?;
        for reg in self.regs {
            write!(f, " {reg:02X}")?;
        }
        Ok(())
    }
}

impl<C: Console> Cpu<C> {
    /// Captures the current state.
    pub const fn snapshot(&self) -> Snapshot {
        let inst = self.fetch();
        Snapshot {
            pc: self.pc,
            fl: self.fl,
            ir: [inst.opcode, inst.operand_a, inst.operand_b],
            regs: self.regs.as_array(),
        }
    }
}
