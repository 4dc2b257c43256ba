//! # Control Flow Tests
//!
//! `JMP`, `JEQ`, `JNE`, driven by `CMP`.

use ls8_core::common::CpuError;
use rstest::rstest;

use crate::common::builder::program::ProgramBuilder;
use crate::common::harness::TestContext;

#[test]
fn test_jmp_sets_pc_from_register() {
    let mut ctx = TestContext::new().load_program(&ProgramBuilder::new().ldi(4, 0x42).jmp(4).build());
    ctx.step(2);
    assert_eq!(ctx.cpu.pc, 0x42);
}

/// Runs `LDI R0,a; LDI R1,b; CMP R0,R1; LDI R2,0x40; <jump> R2` and
/// returns the resulting PC.
fn pc_after_conditional(a: u8, b: u8, jne: bool) -> u8 {
    let prefix = ProgramBuilder::new().ldi(0, a).ldi(1, b).cmp(0, 1).ldi(2, 0x40);
    let image = (if jne { prefix.jne(2) } else { prefix.jeq(2) }).build();
    let mut ctx = TestContext::new().load_program(&image);
    ctx.step(5);
    ctx.cpu.pc
}

#[rstest]
#[case(3, 3, false, 0x40)]
#[case(3, 4, false, 14)]
#[case(3, 4, true, 0x40)]
#[case(3, 3, true, 14)]
fn test_conditional_jumps(
    #[case] a: u8,
    #[case] b: u8,
    #[case] jne: bool,
    #[case] expected_pc: u8,
) {
    assert_eq!(pc_after_conditional(a, b, jne), expected_pc);
}

#[test]
fn test_jne_taken_when_flags_never_set() {
    let mut ctx = TestContext::new().load_program(&ProgramBuilder::new().ldi(0, 0x30).jne(0).build());
    ctx.step(2);
    assert_eq!(ctx.cpu.pc, 0x30);
}

#[test]
fn test_untaken_jump_ignores_bad_register() {
    let mut ctx = TestContext::new().load_program(&ProgramBuilder::new().jeq(9).build());
    ctx.step(1);
    assert_eq!(ctx.cpu.pc, 2);
}

#[test]
fn test_taken_jump_rejects_bad_register() {
    let mut ctx = TestContext::new().load_program(&ProgramBuilder::new().jmp(9).build());
    let err = ctx.cpu.step().unwrap_err();
    assert!(matches!(err, CpuError::InvalidRegister(9)));
}

#[test]
fn test_countdown_loop() {
    // R0 counts 3..1, printing each; loop head at 0x09.
    let image = ProgramBuilder::new()
        .ldi(0, 3)
        .ldi(1, 0)
        .ldi(2, 0x09)
        .prn(0)
        .ldi(3, 255)
        .add(0, 3)
        .cmp(0, 1)
        .jne(2)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load_program(&image);
    ctx.run().unwrap();
    assert_eq!(ctx.output(), &[3, 2, 1]);
    assert!(ctx.cpu.fl.equal());
    assert_eq!(ctx.cpu.stats.branches_taken, 2);
}
