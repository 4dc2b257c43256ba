//! LS-8 opcode values.
//!
//! Each opcode byte is laid out as `AABCDDDD`: operand count, ALU bit,
//! sets-PC bit, and a four-bit instruction identifier.

/// Halt the CPU.
pub const HLT: u8 = 0b0000_0001;

/// Load immediate: `LDI reg, imm8`.
pub const LDI: u8 = 0b1000_0010;

/// Print a register as decimal: `PRN reg`.
pub const PRN: u8 = 0b0100_0111;

/// Add: `ADD regA, regB`.
pub const ADD: u8 = 0b1010_0000;

/// Multiply: `MUL regA, regB`.
pub const MUL: u8 = 0b1010_0010;

/// Push a register onto the stack: `PUSH reg`.
pub const PUSH: u8 = 0b0100_0101;

/// Pop the top of the stack into a register: `POP reg`.
pub const POP: u8 = 0b0100_0110;

/// Call the subroutine whose address is in a register: `CALL reg`.
pub const CALL: u8 = 0b0101_0000;

/// Return from subroutine.
pub const RET: u8 = 0b0001_0001;

/// Compare two registers and set `FL`: `CMP regA, regB`.
pub const CMP: u8 = 0b1010_0111;

/// Unconditional jump to the address in a register: `JMP reg`.
pub const JMP: u8 = 0b0101_0100;

/// Jump if the equal flag is set: `JEQ reg`.
pub const JEQ: u8 = 0b0101_0101;

/// Jump if the equal flag is clear: `JNE reg`.
pub const JNE: u8 = 0b0101_0110;

/// Every opcode the CPU implements, paired with its mnemonic.
pub const ALL: [(u8, &str); 13] = [
    (HLT, "HLT"),
    (LDI, "LDI"),
    (PRN, "PRN"),
    (ADD, "ADD"),
    (MUL, "MUL"),
    (PUSH, "PUSH"),
    (POP, "POP"),
    (CALL, "CALL"),
    (RET, "RET"),
    (CMP, "CMP"),
    (JMP, "JMP"),
    (JEQ, "JEQ"),
    (JNE, "JNE"),
];

/// Returns the mnemonic for an implemented opcode.
pub fn mnemonic(opcode: u8) -> Option<&'static str> {
    ALL.iter()
        .find(|(op, _)| *op == opcode)
        .map(|(_, name)| *name)
}
