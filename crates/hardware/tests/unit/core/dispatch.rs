//! # Dispatch Table Tests

use ls8_core::core::cpu::dispatch::DispatchTable;
use ls8_core::isa::opcodes::{self as op, ALL};
use ls8_core::soc::BufferConsole;

use crate::common::builder::program::ProgramBuilder;
use crate::common::harness::TestContext;

#[test]
fn test_dispatch_maps_every_implemented_opcode() {
    let table = DispatchTable::<BufferConsole>::new();
    for (opcode, name) in ALL {
        assert!(table.lookup(opcode).is_some(), "{name} is not mapped");
    }
}

#[test]
fn test_dispatch_leaves_other_opcodes_unmapped() {
    let table = DispatchTable::<BufferConsole>::new();
    let mapped = (0..=255u8).filter(|&b| table.lookup(b).is_some()).count();
    assert_eq!(mapped, ALL.len());
    assert!(table.lookup(0).is_none());
    assert!(table.lookup(0xFF).is_none());
}

#[test]
fn test_dispatch_debug_lists_mapped_opcodes() {
    let text = format!("{:?}", DispatchTable::<BufferConsole>::new());
    assert!(text.contains("0x82"), "{text}");
    assert!(!text.contains("0x00"), "{text}");
}

#[test]
fn test_ldi_loads_immediate_and_advances_three() {
    let mut ctx = TestContext::new().load_program(&ProgramBuilder::new().ldi(5, 0xAB).build());
    ctx.step(1);
    assert_eq!(ctx.get_reg(5), 0xAB);
    assert_eq!(ctx.cpu.pc, 3);
}

#[test]
fn test_prn_emits_decimal_and_advances_two() {
    let mut ctx = TestContext::new().load_program(
        &ProgramBuilder::new().ldi(2, 255).prn(2).build(),
    );
    ctx.step(2);
    assert_eq!(ctx.output(), &[255]);
    assert_eq!(ctx.cpu.console().text(), "255\n");
    assert_eq!(ctx.cpu.pc, 5);
}

#[test]
fn test_hlt_clears_running() {
    let mut ctx = TestContext::new().load_program(&[op::HLT]);
    assert!(!ctx.cpu.halted());
    ctx.step(1);
    assert!(ctx.cpu.halted());
    assert!(!ctx.cpu.running);
}

#[test]
fn test_alu_opcodes_route_through_shared_handler() {
    let image = ProgramBuilder::new()
        .ldi(0, 6)
        .ldi(1, 7)
        .add(0, 1)
        .mul(0, 1)
        .cmp(0, 1)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load_program(&image);
    ctx.run().unwrap();
    assert_eq!(ctx.get_reg(0), 91);
    assert!(ctx.cpu.fl.greater());
}

#[test]
fn test_instruction_register_holds_last_opcode() {
    let mut ctx = TestContext::new().load_program(&ProgramBuilder::new().ldi(0, 1).prn(0).build());
    ctx.step(1);
    assert_eq!(ctx.cpu.ir, op::LDI);
    ctx.step(1);
    assert_eq!(ctx.cpu.ir, op::PRN);
}
