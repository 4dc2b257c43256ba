//! Simulation utilities and program loading.
//!
//! Provides the text program loader and the `Simulator` wrapper that applies
//! run-level policy on top of the CPU.

/// Text program parser and file loader.
pub mod loader;

/// Configured CPU plus run policy.
pub mod simulator;

pub use simulator::{ExitReason, Simulator};
