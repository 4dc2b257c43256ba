//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the LS-8 opcode table, the opcode-byte field layout, and a
//! disassembler for traces and listings.

/// Instruction disassembler for debug tracing and listings.
pub mod disasm;

/// Opcode-byte field accessors and the fetched instruction view.
pub mod instruction;

/// Opcode values and mnemonics.
pub mod opcodes;
