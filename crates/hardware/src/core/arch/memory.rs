//! Main Memory.
//!
//! This module implements the 256-byte RAM of the LS-8. It performs the following:
//! 1. **Storage:** 256 byte cells, zero-initialised, fixed for the machine's lifetime.
//! 2. **Access:** Byte reads and writes addressed by a `u8`, so every address is valid.
//! 3. **Loading:** Copies a program image in at address 0.

use crate::common::constants::MEMORY_SIZE;
use crate::common::error::LoadError;

/// Byte-addressable main memory.
///
/// Addresses are `u8`, so the 256 cells cover the whole address space and no
/// access can fall outside it. Address arithmetic elsewhere wraps modulo 256.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Default for Memory {
    fn default() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }
}

impl Memory {
    /// Creates a zero-filled memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the byte at `addr` (the memory address register, MAR).
    #[inline]
    pub const fn read(&self, addr: u8) -> u8 {
        self.cells[addr as usize]
    }

    /// Writes `val` (the memory data register, MDR) at `addr`.
    #[inline]
    pub const fn write(&mut self, addr: u8, val: u8) {
        self.cells[addr as usize] = val;
    }

    /// Copies a program image into memory starting at address 0.
    ///
    /// Cells past the end of the image are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::ProgramTooLarge`] if the image exceeds the memory
    /// size; memory is not modified in that case.
    pub fn load(&mut self, image: &[u8]) -> Result<(), LoadError> {
        let dst = self
            .cells
            .get_mut(..image.len())
            .ok_or(LoadError::ProgramTooLarge {
                len: image.len(),
                capacity: MEMORY_SIZE,
            })?;
        dst.copy_from_slice(image);
        Ok(())
    }

    /// Returns the whole memory as a slice.
    pub const fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}
