//! Simulator: a configured CPU plus run policy.
//!
//! `Cpu::run` loops until `HLT` with no other bound. The `Simulator` adds the
//! optional instruction budget from the configuration so a runaway program can
//! be stopped from the command line.

use std::path::Path;

use tracing::warn;

use crate::common::error::CpuError;
use crate::config::Config;
use crate::core::Cpu;
use crate::soc::console::{Console, StdoutConsole};

/// Why a simulation run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitReason {
    /// The program executed `HLT`.
    Halted,
    /// The instruction budget ran out before `HLT`.
    StepLimit(u64),
}

/// Top-level simulator.
#[derive(Debug)]
pub struct Simulator<C: Console = StdoutConsole> {
    /// CPU architectural state.
    pub cpu: Cpu<C>,
    max_steps: Option<u64>,
}

impl Simulator<StdoutConsole> {
    /// Creates a simulator that prints to stdout.
    pub fn new(config: &Config) -> Self {
        Self::with_console(StdoutConsole, config)
    }
}

impl<C: Console> Simulator<C> {
    /// Creates a simulator with the given console.
    pub fn with_console(console: C, config: &Config) -> Self {
        Self {
            cpu: Cpu::with_console(console, config),
            max_steps: config.general.max_steps,
        }
    }

    /// Loads a byte image at address 0.
    ///
    /// # Errors
    ///
    /// See [`Cpu::load`].
    pub fn load(&mut self, image: &[u8]) -> Result<(), CpuError> {
        self.cpu.load(image)
    }

    /// Loads a text program file.
    ///
    /// # Errors
    ///
    /// See [`Cpu::load_file`].
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), CpuError> {
        self.cpu.load_file(path)
    }

    /// Runs until `HLT`, a fatal error, or the instruction budget is spent.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the CPU.
    pub fn run(&mut self) -> Result<ExitReason, CpuError> {
        let Some(limit) = self.max_steps else {
            self.cpu.run()?;
            return Ok(ExitReason::Halted);
        };

        let mut steps = 0;
        while self.cpu.running {
            if steps == limit {
                warn!(limit, pc = self.cpu.pc, "instruction limit reached");
                return Ok(ExitReason::StepLimit(limit));
            }
            self.cpu.step()?;
            steps += 1;
        }
        Ok(ExitReason::Halted)
    }
}
