//! Global Machine Constants.
//!
//! This module defines the fixed dimensions of the LS-8 machine. It includes:
//! 1. **Memory Constants:** Size of the byte-addressable RAM.
//! 2. **Register Constants:** Register file size and the stack pointer convention.
//! 3. **Flag Constants:** Bit positions of the comparison flags in `FL`.

/// Number of addressable memory cells (addresses `0x00`-`0xFF`).
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers (`R0`-`R7`).
pub const REGISTER_COUNT: usize = 8;

/// Register index used as the stack pointer by convention.
///
/// Nothing prevents a program from writing to `R7` directly; the stack
/// instructions simply treat it as the top-of-stack address.
pub const SP: u8 = 7;

/// Default initial stack pointer.
///
/// Addresses `0xF4`-`0xFF` are left free above the stack, so the first push
/// lands at `0xF3`.
pub const DEFAULT_INITIAL_SP: u8 = 0xF4;

/// Equal flag (bit 0 of `FL`).
pub const FLAG_EQUAL: u8 = 0b0000_0001;

/// Greater-than flag (bit 1 of `FL`).
pub const FLAG_GREATER: u8 = 0b0000_0010;

/// Less-than flag (bit 2 of `FL`).
pub const FLAG_LESS: u8 = 0b0000_0100;
