//! Execution statistics collection and reporting.
//!
//! This module tracks what a program did while it ran. It provides:
//! 1. **Totals:** Instructions retired and wall-clock time.
//! 2. **Instruction mix:** Counts by category (load, ALU, stack, branch, I/O, halt).
//! 3. **Control flow:** How many jumps, calls and returns transferred control.

use std::time::Instant;

use serde::Serialize;

use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes as op;

/// Execution statistics.
#[derive(Clone, Debug, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    /// Number of instructions executed to completion.
    pub instructions_retired: u64,

    /// `LDI` instructions retired.
    pub inst_load: u64,
    /// `ADD`, `MUL`, `CMP` instructions retired.
    pub inst_alu: u64,
    /// `PUSH`, `POP` instructions retired.
    pub inst_stack: u64,
    /// `CALL`, `RET`, `JMP`, `JEQ`, `JNE` instructions retired.
    pub inst_branch: u64,
    /// `PRN` instructions retired.
    pub inst_io: u64,
    /// `HLT` instructions retired.
    pub inst_halt: u64,

    /// Control-flow instructions that transferred control.
    pub branches_taken: u64,
    /// Deepest stack seen, in bytes below the initial stack pointer.
    pub max_stack_depth: u8,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_load: 0,
            inst_alu: 0,
            inst_stack: 0,
            inst_branch: 0,
            inst_io: 0,
            inst_halt: 0,
            branches_taken: 0,
            max_stack_depth: 0,
        }
    }
}

impl SimStats {
    /// Records one retired instruction.
    ///
    /// # Arguments
    ///
    /// * `opcode` - The opcode that was executed.
    /// * `taken` - Whether the instruction transferred control (a jump, call or return).
    pub fn record(&mut self, opcode: u8, taken: bool) {
        self.instructions_retired += 1;

        if opcode.is_alu() {
            self.inst_alu += 1;
        } else if opcode.sets_pc() {
            self.inst_branch += 1;
            if taken {
                self.branches_taken += 1;
            }
        } else {
            match opcode {
                op::LDI => self.inst_load += 1,
                op::PUSH | op::POP => self.inst_stack += 1,
                op::PRN => self.inst_io += 1,
                op::HLT => self.inst_halt += 1,
                _ => {}
            }
        }
    }

    /// Tracks the stack high-water mark.
    pub fn observe_stack(&mut self, initial_sp: u8, sp: u8) {
        if sp <= initial_sp {
            self.max_stack_depth = self.max_stack_depth.max(initial_sp - sp);
        }
    }

    /// Renders the statistics as a JSON object.
    ///
    /// # Errors
    ///
    /// Propagates the `serde_json` serialization error.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Prints a text report to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let pct = |n: u64| {
            if self.instructions_retired == 0 {
                0.0
            } else {
                (n as f64 / self.instructions_retired as f64) * 100.0
            }
        };

        println!("\n==========================================================");
        println!("LS-8 EXECUTION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_insts                {}", self.instructions_retired);
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!("  op.load                {} ({:.2}%)", self.inst_load, pct(self.inst_load));
        println!("  op.alu                 {} ({:.2}%)", self.inst_alu, pct(self.inst_alu));
        println!("  op.stack               {} ({:.2}%)", self.inst_stack, pct(self.inst_stack));
        println!("  op.branch              {} ({:.2}%)", self.inst_branch, pct(self.inst_branch));
        println!("  op.io                  {} ({:.2}%)", self.inst_io, pct(self.inst_io));
        println!("  op.halt                {} ({:.2}%)", self.inst_halt, pct(self.inst_halt));
        println!("----------------------------------------------------------");
        println!("  branch.taken           {}", self.branches_taken);
        println!("  stack.max_depth        {} bytes", self.max_stack_depth);
        println!("==========================================================");
    }
}
