//! Instruction encoding utilities.
//!
//! Provides bit extraction for the `AABCDDDD` opcode layout and the transient
//! `Instruction` view fetched from memory at the program counter.

/// Shift for the operand-count field (bits 6-7).
pub const OPERAND_COUNT_SHIFT: u8 = 6;
/// Bit mask for the ALU flag (bit 5).
pub const ALU_MASK: u8 = 0b0010_0000;
/// Bit mask for the sets-PC flag (bit 4).
pub const SETS_PC_MASK: u8 = 0b0001_0000;
/// Bit mask for the instruction identifier (bits 0-3).
pub const IDENTIFIER_MASK: u8 = 0b0000_1111;

/// Trait for extracting encoding fields from an opcode byte.
pub trait InstructionBits {
    /// Number of operand bytes following the opcode (0-2, or 3 for a
    /// malformed byte).
    fn operand_count(&self) -> u8;

    /// Encoded width in bytes: the opcode plus its operands.
    fn width(&self) -> u8 {
        self.operand_count() + 1
    }

    /// Whether the instruction is executed by the ALU.
    fn is_alu(&self) -> bool;

    /// Whether the instruction writes PC itself rather than falling through.
    fn sets_pc(&self) -> bool;

    /// The four-bit instruction identifier; for ALU instructions this selects
    /// the ALU operation.
    fn alu_selector(&self) -> u8;
}

impl InstructionBits for u8 {
    #[inline]
    fn operand_count(&self) -> u8 {
        self >> OPERAND_COUNT_SHIFT
    }

    #[inline]
    fn is_alu(&self) -> bool {
        self & ALU_MASK != 0
    }

    #[inline]
    fn sets_pc(&self) -> bool {
        self & SETS_PC_MASK != 0
    }

    #[inline]
    fn alu_selector(&self) -> u8 {
        self & IDENTIFIER_MASK
    }
}

/// An instruction as fetched at the program counter.
///
/// Both operand bytes are always read, whether or not the opcode uses them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Address the opcode was fetched from.
    pub pc: u8,
    /// The opcode byte.
    pub opcode: u8,
    /// Byte at `pc + 1`.
    pub operand_a: u8,
    /// Byte at `pc + 2`.
    pub operand_b: u8,
}
