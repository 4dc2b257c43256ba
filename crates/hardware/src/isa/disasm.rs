//! Instruction Disassembler for the LS-8.
//!
//! Converts an opcode and its operand bytes into a human-readable mnemonic
//! string for debug tracing and program listings.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0b1000_0010, 0, 8), "LDI R0, 8");
//! assert_eq!(disassemble(0b1010_0010, 0, 1), "MUL R0, R1");
//! ```

use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes::{self as op, mnemonic};

/// Disassembles one instruction.
///
/// Register operands are rendered as `Rn`, the `LDI` immediate as decimal.
/// Unimplemented opcodes render as `??? 0xNN`.
///
/// # Arguments
///
/// * `opcode` - The opcode byte.
/// * `a` - First operand byte (ignored if the opcode takes none).
/// * `b` - Second operand byte (ignored if the opcode takes fewer than two).
pub fn disassemble(opcode: u8, a: u8, b: u8) -> String {
    let Some(name) = mnemonic(opcode) else {
        return format!("??? {opcode:#04x}");
    };

    match (opcode, opcode.operand_count()) {
        (op::LDI, _) => format!("{name} R{a}, {b}"),
        (_, 0) => name.to_string(),
        (_, 1) => format!("{name} R{a}"),
        _ => format!("{name} R{a}, R{b}"),
    }
}

/// Produces a linear listing of a program image.
///
/// Each line is `ADDR: BYTES  MNEMONIC`. Bytes are consumed according to the
/// encoded width of each opcode, so data embedded in the image is listed as
/// if it were code. Unknown opcodes consume one byte.
pub fn listing(image: &[u8]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut addr = 0usize;

    while addr < image.len() {
        let opcode = image[addr];
        let width = if mnemonic(opcode).is_some() {
            opcode.width() as usize
        } else {
            1
        };
        let bytes: Vec<u8> = (0..width)
            .map(|i| image.get(addr + i).copied().unwrap_or(0))
            .collect();
        let hex: Vec<String> = bytes.iter().map(|b| format!("{b:02X}")).collect();
        let a = bytes.get(1).copied().unwrap_or(0);
        let b = bytes.get(2).copied().unwrap_or(0);

        lines.push(format!(
            "{addr:02X}: {:<8}  {}",
            hex.join(" "),
            disassemble(opcode, a, b)
        ));
        addr += width;
    }

    lines
}
