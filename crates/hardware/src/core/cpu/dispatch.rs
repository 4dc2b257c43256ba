//! Opcode Dispatch.
//!
//! This module maps each opcode byte to the routine that executes it. It provides:
//! 1. **Branch Table:** A 256-entry array indexed by opcode, filled once when the CPU is built.
//! 2. **Handlers:** One function per instruction. Every handler receives both prefetched
//!    operand bytes and is solely responsible for moving PC.

use std::fmt;

use crate::common::error::CpuError;
use crate::core::cpu::Cpu;
use crate::core::units::alu::Alu;
use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes as op;
use crate::soc::console::Console;

/// An instruction handler: `(cpu, operand_a, operand_b)`.
pub type Handler<C> = fn(&mut Cpu<C>, u8, u8) -> Result<(), CpuError>;

/// Opcode-indexed branch table.
pub struct DispatchTable<C: Console> {
    handlers: [Option<Handler<C>>; 256],
}

impl<C: Console> fmt::Debug for DispatchTable<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mapped: Vec<String> = self
            .handlers
            .iter()
            .enumerate()
            .filter(|(_, h)| h.is_some())
            .map(|(opcode, _)| format!("{opcode:#04x}"))
            .collect();
        f.debug_struct("DispatchTable")
            .field("mapped", &mapped)
            .finish()
    }
}

impl<C: Console> Default for DispatchTable<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Console> DispatchTable<C> {
    /// Builds the table for the LS-8 instruction set.
    pub fn new() -> Self {
        let mut table = Self {
            handlers: [None; 256],
        };

        table.register(op::HLT, hlt::<C>);
        table.register(op::LDI, ldi::<C>);
        table.register(op::PRN, prn::<C>);
        table.register(op::ADD, alu::<C>);
        table.register(op::MUL, alu::<C>);
        table.register(op::CMP, alu::<C>);
        table.register(op::PUSH, push::<C>);
        table.register(op::POP, pop::<C>);
        table.register(op::CALL, call::<C>);
        table.register(op::RET, ret::<C>);
        table.register(op::JMP, jmp::<C>);
        table.register(op::JEQ, jeq::<C>);
        table.register(op::JNE, jne::<C>);

        table
    }

    fn register(&mut self, opcode: u8, handler: Handler<C>) {
        self.handlers[opcode as usize] = Some(handler);
    }

    /// Returns the handler for `opcode`, if one is registered.
    #[inline]
    pub fn lookup(&self, opcode: u8) -> Option<Handler<C>> {
        self.handlers[opcode as usize]
    }
}

fn hlt<C: Console>(cpu: &mut Cpu<C>, _a: u8, _b: u8) -> Result<(), CpuError> {
    cpu.running = false;
    cpu.advance_pc();
    Ok(())
}

fn ldi<C: Console>(cpu: &mut Cpu<C>, reg: u8, imm: u8) -> Result<(), CpuError> {
    cpu.regs.write(reg, imm)?;
    cpu.advance_pc();
    Ok(())
}

fn prn<C: Console>(cpu: &mut Cpu<C>, reg: u8, _b: u8) -> Result<(), CpuError> {
    let value = cpu.regs.read(reg)?;
    cpu.console.emit(value)?;
    cpu.advance_pc();
    Ok(())
}

/// ADD, MUL and CMP share one handler; the ALU decodes the operation from
/// the low bits of the instruction register.
fn alu<C: Console>(cpu: &mut Cpu<C>, reg_a: u8, reg_b: u8) -> Result<(), CpuError> {
    Alu::execute_selector(
        cpu.ir.alu_selector(),
        &mut cpu.regs,
        &mut cpu.fl,
        reg_a,
        reg_b,
    )?;
    cpu.advance_pc();
    Ok(())
}

fn push<C: Console>(cpu: &mut Cpu<C>, reg: u8, _b: u8) -> Result<(), CpuError> {
    cpu.push(reg)?;
    cpu.advance_pc();
    Ok(())
}

fn pop<C: Console>(cpu: &mut Cpu<C>, reg: u8, _b: u8) -> Result<(), CpuError> {
    cpu.pop(reg)?;
    cpu.advance_pc();
    Ok(())
}

fn call<C: Console>(cpu: &mut Cpu<C>, reg: u8, _b: u8) -> Result<(), CpuError> {
    cpu.call(reg)
}

fn ret<C: Console>(cpu: &mut Cpu<C>, _a: u8, _b: u8) -> Result<(), CpuError> {
    cpu.ret();
    Ok(())
}

fn jmp<C: Console>(cpu: &mut Cpu<C>, reg: u8, _b: u8) -> Result<(), CpuError> {
    cpu.jump(reg)
}

fn jeq<C: Console>(cpu: &mut Cpu<C>, reg: u8, _b: u8) -> Result<(), CpuError> {
    let equal = cpu.fl.equal();
    cpu.jump_if(reg, equal)
}

fn jne<C: Console>(cpu: &mut Cpu<C>, reg: u8, _b: u8) -> Result<(), CpuError> {
    let equal = cpu.fl.equal();
    cpu.jump_if(reg, !equal)
}
