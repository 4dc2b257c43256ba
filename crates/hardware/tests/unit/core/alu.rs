//! # ALU Tests
//!
//! Direct tests of the ALU unit, independent of dispatch.

use ls8_core::common::{CpuError, RegisterFile};
use ls8_core::core::arch::Flags;
use ls8_core::core::units::alu::{Alu, AluOp, SEL_ADD, SEL_CMP, SEL_MUL};
use proptest::prelude::*;
use rstest::rstest;

fn regs_with(a: u8, b: u8) -> RegisterFile {
    let mut regs = RegisterFile::new();
    regs.write(0, a).unwrap();
    regs.write(1, b).unwrap();
    regs
}

#[rstest]
#[case(AluOp::Add, 3, 4, 7)]
#[case(AluOp::Add, 200, 100, 44)]
#[case(AluOp::Mul, 8, 9, 72)]
#[case(AluOp::Mul, 16, 16, 0)]
#[case(AluOp::Mul, 0, 255, 0)]
fn test_alu_arithmetic_writes_reg_a(
    #[case] op: AluOp,
    #[case] a: u8,
    #[case] b: u8,
    #[case] expected: u8,
) {
    let mut regs = regs_with(a, b);
    let mut fl = Flags::from_bits(0b100);
    Alu::execute(op, &mut regs, &mut fl, 0, 1).unwrap();
    assert_eq!(regs.read(0).unwrap(), expected);
    assert_eq!(regs.read(1).unwrap(), b);
    assert_eq!(fl.bits(), 0b100, "arithmetic leaves flags alone");
}

#[rstest]
#[case(5, 5, 0b001)]
#[case(6, 5, 0b010)]
#[case(4, 5, 0b100)]
#[case(0, 255, 0b100)]
fn test_alu_compare_sets_flags_only(#[case] a: u8, #[case] b: u8, #[case] bits: u8) {
    let mut regs = regs_with(a, b);
    let mut fl = Flags::default();
    Alu::execute(AluOp::Cmp, &mut regs, &mut fl, 0, 1).unwrap();
    assert_eq!(fl.bits(), bits);
    assert_eq!(regs.read(0).unwrap(), a);
    assert_eq!(regs.read(1).unwrap(), b);
}

#[test]
fn test_alu_same_register_operands() {
    let mut regs = regs_with(21, 0);
    let mut fl = Flags::default();
    Alu::execute(AluOp::Add, &mut regs, &mut fl, 0, 0).unwrap();
    assert_eq!(regs.read(0).unwrap(), 42);
}

#[rstest]
#[case(SEL_ADD, AluOp::Add)]
#[case(SEL_MUL, AluOp::Mul)]
#[case(SEL_CMP, AluOp::Cmp)]
fn test_alu_selector_decodes(#[case] selector: u8, #[case] op: AluOp) {
    assert_eq!(AluOp::try_from(selector).unwrap(), op);
}

#[test]
fn test_alu_unknown_selector_is_unsupported() {
    let mut regs = regs_with(1, 2);
    let mut fl = Flags::default();
    let err = Alu::execute_selector(0b0001, &mut regs, &mut fl, 0, 1).unwrap_err();
    assert!(matches!(err, CpuError::UnsupportedAluOperation(0b0001)));
    assert_eq!(regs.read(0).unwrap(), 1);
}

#[test]
fn test_alu_bad_register_operand() {
    let mut regs = RegisterFile::new();
    let mut fl = Flags::default();
    let err = Alu::execute(AluOp::Add, &mut regs, &mut fl, 0, 9).unwrap_err();
    assert!(matches!(err, CpuError::InvalidRegister(9)));
}

proptest! {
    #[test]
    fn prop_add_wraps_modulo_256(a in any::<u8>(), b in any::<u8>()) {
        let mut regs = regs_with(a, b);
        let mut fl = Flags::default();
        Alu::execute(AluOp::Add, &mut regs, &mut fl, 0, 1).unwrap();
        prop_assert_eq!(u32::from(regs.read(0).unwrap()), (u32::from(a) + u32::from(b)) % 256);
    }

    #[test]
    fn prop_mul_wraps_modulo_256(a in any::<u8>(), b in any::<u8>()) {
        let mut regs = regs_with(a, b);
        let mut fl = Flags::default();
        Alu::execute(AluOp::Mul, &mut regs, &mut fl, 0, 1).unwrap();
        prop_assert_eq!(u32::from(regs.read(0).unwrap()), (u32::from(a) * u32::from(b)) % 256);
    }
}
