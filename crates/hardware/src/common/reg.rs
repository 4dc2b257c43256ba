//! Register File.
//!
//! This module provides the `RegisterFile` struct holding the eight byte-wide
//! general-purpose registers. It provides:
//! 1. **Storage:** Eight registers, zero-initialised.
//! 2. **Bounds Checking:** Register operands outside `R0`-`R7` are rejected.
//! 3. **Observability:** A raw view of all registers for snapshots and dumps.

use crate::common::constants::{REGISTER_COUNT, SP};
use crate::common::error::CpuError;

/// General-purpose register file.
///
/// `R7` doubles as the stack pointer by convention; the register file itself
/// does not treat it specially.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; REGISTER_COUNT],
}

impl RegisterFile {
    /// Creates a new register file with all registers set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a register file with `R7` preset to `sp` and the rest zero.
    pub const fn with_stack_pointer(sp: u8) -> Self {
        let mut regs = [0; REGISTER_COUNT];
        regs[SP as usize] = sp;
        Self { regs }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index taken from an operand byte.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::InvalidRegister`] if `idx` is not in `0..8`.
    pub fn read(&self, idx: u8) -> Result<u8, CpuError> {
        self.regs
            .get(idx as usize)
            .copied()
            .ok_or(CpuError::InvalidRegister(idx))
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index taken from an operand byte.
    /// * `val` - The value to store.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::InvalidRegister`] if `idx` is not in `0..8`.
    pub fn write(&mut self, idx: u8, val: u8) -> Result<(), CpuError> {
        let slot = self
            .regs
            .get_mut(idx as usize)
            .ok_or(CpuError::InvalidRegister(idx))?;
        *slot = val;
        Ok(())
    }

    /// Current stack pointer (`R7`).
    #[inline]
    pub const fn sp(&self) -> u8 {
        self.regs[SP as usize]
    }

    /// Sets the stack pointer (`R7`).
    #[inline]
    pub const fn set_sp(&mut self, val: u8) {
        self.regs[SP as usize] = val;
    }

    /// Returns a copy of all eight registers.
    pub const fn as_array(&self) -> [u8; REGISTER_COUNT] {
        self.regs
    }

    /// Dumps the registers to stdout, four per line.
    pub fn dump(&self) {
        for (row, chunk) in self.regs.chunks(4).enumerate() {
            let line: Vec<String> = chunk
                .iter()
                .enumerate()
                .map(|(i, v)| format!("R{}={:#04x}", row * 4 + i, v))
                .collect();
            println!("{}", line.join(" "));
        }
    }
}
