//! Common utilities and types used throughout the LS-8 emulator.
//!
//! This module provides the building blocks shared by every other component:
//! 1. **Constants:** Machine dimensions, the stack pointer index, flag bits.
//! 2. **Error Handling:** Execution and program-load error types.
//! 3. **Register Management:** The eight-slot general-purpose register file.

/// Common constants used throughout the emulator.
pub mod constants;

/// Error types for execution and loading.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{MEMORY_SIZE, REGISTER_COUNT, SP};
pub use error::{CpuError, LoadError};
pub use reg::RegisterFile;
