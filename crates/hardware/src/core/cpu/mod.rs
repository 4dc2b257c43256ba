//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which owns the entire
//! machine state. It coordinates the following:
//! 1. **State Management:** Memory, registers, program counter, flags, run state.
//! 2. **Dispatch:** A 256-entry opcode table built once at construction.
//! 3. **Subroutine Linkage:** Stack and call/return built on `R7`.
//! 4. **Observability:** Non-mutating snapshots for trace output.

/// Control-flow unit (JMP, JEQ, JNE).
pub mod control;

/// Opcode dispatch table and instruction handlers.
pub mod dispatch;

/// Fetch-decode-execute loop.
pub mod execution;

/// Read-only state snapshots for tracing.
pub mod snapshot;

/// Stack and subroutine unit (PUSH, POP, CALL, RET).
pub mod stack;

use std::path::Path;

use tracing::debug;

use crate::common::error::CpuError;
use crate::common::RegisterFile;
use crate::config::Config;
use crate::core::arch::{Flags, Memory};
use crate::sim::loader;
use crate::soc::console::{Console, StdoutConsole};
use crate::stats::SimStats;

use self::dispatch::DispatchTable;

/// Main CPU structure containing all machine state.
///
/// A `Cpu` is built once per run, loaded with a program, then driven by
/// [`Cpu::run`] until `HLT` or a fatal error.
#[derive(Debug)]
pub struct Cpu<C: Console = StdoutConsole> {
    /// Main memory.
    pub ram: Memory,
    /// General-purpose registers; `R7` is the stack pointer.
    pub regs: RegisterFile,
    /// Program Counter.
    pub pc: u8,
    /// Flag register.
    pub fl: Flags,
    /// Instruction Register: opcode of the instruction being executed.
    pub ir: u8,
    /// Cleared by `HLT`.
    pub running: bool,
    /// Print a trace line before every instruction.
    pub trace: bool,
    /// Execution statistics.
    pub stats: SimStats,
    /// Stack pointer value at reset, used for stack depth statistics.
    pub initial_sp: u8,
    /// Set by the current instruction when it transferred control.
    branch_taken: bool,
    console: C,
    dispatch: DispatchTable<C>,
}

impl Cpu<StdoutConsole> {
    /// Creates a CPU that prints to stdout.
    pub fn new(config: &Config) -> Self {
        Self::with_console(StdoutConsole, config)
    }
}

impl<C: Console> Cpu<C> {
    /// Creates a CPU with the given console.
    ///
    /// Memory, registers and flags start zeroed, except `R7` which holds the
    /// configured initial stack pointer.
    ///
    /// # Arguments
    ///
    /// * `console` - Sink for `PRN` output.
    /// * `config` - Emulator configuration.
    pub fn with_console(console: C, config: &Config) -> Self {
        Self {
            ram: Memory::new(),
            regs: RegisterFile::with_stack_pointer(config.general.initial_sp),
            pc: 0,
            fl: Flags::default(),
            ir: 0,
            running: true,
            trace: config.general.trace_instructions,
            stats: SimStats::default(),
            initial_sp: config.general.initial_sp,
            branch_taken: false,
            console,
            dispatch: DispatchTable::new(),
        }
    }

    /// Reads a byte from memory.
    pub const fn ram_read(&self, addr: u8) -> u8 {
        self.ram.read(addr)
    }

    /// Writes a byte to memory.
    pub const fn ram_write(&mut self, addr: u8, val: u8) {
        self.ram.write(addr, val);
    }

    /// Copies a program image into memory at address 0.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::Load`] if the image is larger than memory; memory is
    /// unchanged in that case.
    pub fn load(&mut self, image: &[u8]) -> Result<(), CpuError> {
        self.ram.load(image)?;
        debug!(bytes = image.len(), "program loaded");
        Ok(())
    }

    /// Parses a text program file and loads it.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::Load`] if the file is missing, unreadable, malformed
    /// or too large. Memory is left untouched on any error.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), CpuError> {
        let image = loader::load_program(path)?;
        self.load(&image)
    }

    /// The console receiving `PRN` output.
    pub const fn console(&self) -> &C {
        &self.console
    }

    /// Whether the CPU has executed `HLT`.
    pub const fn halted(&self) -> bool {
        !self.running
    }

    /// Dumps the current CPU state (PC, flags and registers) to stdout.
    pub fn dump_state(&self) {
        println!("PC = {:#04x}  FL = {:#010b}", self.pc, self.fl.bits());
        self.regs.dump();
    }
}
