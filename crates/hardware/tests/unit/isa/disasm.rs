//! # Disassembler Tests

use ls8_core::isa::disasm::{disassemble, listing};
use ls8_core::isa::opcodes::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(HLT, 0, 0, "HLT")]
#[case(RET, 0, 0, "RET")]
#[case(LDI, 3, 200, "LDI R3, 200")]
#[case(PRN, 0, 0, "PRN R0")]
#[case(PUSH, 7, 0, "PUSH R7")]
#[case(CALL, 1, 0, "CALL R1")]
#[case(ADD, 0, 0, "ADD R0, R0")]
#[case(CMP, 2, 5, "CMP R2, R5")]
#[case(JNE, 4, 0, "JNE R4")]
#[case(0, 0, 0, "??? 0x00")]
#[case(0xFF, 1, 2, "??? 0xff")]
fn test_disassemble(#[case] opcode: u8, #[case] a: u8, #[case] b: u8, #[case] text: &str) {
    assert_eq!(disassemble(opcode, a, b), text);
}

#[test]
fn test_listing_follows_instruction_widths() {
    let image = [LDI, 0, 8, PRN, 0, HLT];
    assert_eq!(
        listing(&image),
        vec![
            "00: 82 00 08  LDI R0, 8".to_string(),
            "03: 47 00     PRN R0".to_string(),
            "05: 01        HLT".to_string(),
        ]
    );
}

#[test]
fn test_listing_unknown_byte_consumes_one() {
    let image = [0x00, HLT];
    let lines = listing(&image);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("??? 0x00"), "{}", lines[0]);
    assert!(lines[1].starts_with("01: 01"), "{}", lines[1]);
}

#[test]
fn test_listing_truncated_instruction_pads_with_zero() {
    let lines = listing(&[LDI, 1]);
    assert_eq!(lines, vec!["00: 82 01 00  LDI R1, 0".to_string()]);
}

#[test]
fn test_listing_empty_image() {
    assert!(listing(&[]).is_empty());
}
