//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the LS-8 opcode values, the metadata encoded in each opcode's bit
//! pattern, the static opcode-to-handler dispatch table, and a disassembler.
//!
//! # Opcode layout
//!
//! ```text
//! AABCDDDD
//! ||||++++- instruction identifier (with B and C)
//! |||+----- assigns PC directly
//! ||+------ routed through the ALU
//! ++------- operand count
//! ```

/// Opcode-to-handler dispatch table.
pub mod dispatch;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Opcode bit-field extraction and instruction classes.
pub mod instruction;

/// Opcode values and mnemonics.
pub mod opcodes;
