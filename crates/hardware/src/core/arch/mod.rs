//! LS-8 architectural state.
//!
//! This module contains the storage elements of the machine besides the
//! register file:
//! 1. **Flags:** The `FL` comparison register.
//! 2. **Memory:** The 256-byte main memory.

/// Flag register (E/G/L).
pub mod flags;

/// Main memory.
pub mod memory;

pub use flags::Flags;
pub use memory::Memory;
