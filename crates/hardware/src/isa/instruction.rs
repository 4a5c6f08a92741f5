//! Instruction encoding utilities.
//!
//! Provides bit extraction for the metadata every LS-8 opcode carries, and the
//! coarse instruction classes used for statistics.

use super::opcodes;

/// Bit shift for the operand-count field (bits 6-7).
pub const OPERAND_COUNT_SHIFT: u8 = 6;
/// Bit mask for the ALU flag (bit 5).
pub const ALU_MASK: u8 = 0b0010_0000;
/// Bit mask for the PC-setting flag (bit 4).
pub const SETS_PC_MASK: u8 = 0b0001_0000;
/// Bit mask for the identifier field (bits 0-4).
pub const IDENTIFIER_MASK: u8 = 0b0001_1111;

/// Trait for extracting metadata fields from an opcode byte.
pub trait InstructionBits {
    /// Number of operand bytes following the opcode (bits 6-7).
    fn operand_count(&self) -> usize;

    /// Whether the instruction is executed by the ALU (bit 5).
    fn is_alu(&self) -> bool;

    /// Whether the instruction assigns PC instead of falling through (bit 4).
    fn sets_pc(&self) -> bool;

    /// Instruction identifier (bits 0-4).
    fn identifier(&self) -> u8;

    /// Total encoded width in bytes: the opcode plus its operands.
    ///
    /// This is the PC advance of every instruction that falls through.
    fn width(&self) -> usize {
        1 + self.operand_count()
    }
}

impl InstructionBits for u8 {
    #[inline(always)]
    fn operand_count(&self) -> usize {
        (self >> OPERAND_COUNT_SHIFT) as usize
    }

    #[inline(always)]
    fn is_alu(&self) -> bool {
        self & ALU_MASK != 0
    }

    #[inline(always)]
    fn sets_pc(&self) -> bool {
        self & SETS_PC_MASK != 0
    }

    #[inline(always)]
    fn identifier(&self) -> u8 {
        self & IDENTIFIER_MASK
    }
}

/// Coarse instruction categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstructionClass {
    /// Arithmetic, logic, and compare (ADD, MUL, AND, CMP).
    Alu,
    /// Register loads and memory stores (LDI, ST).
    LoadStore,
    /// Stack manipulation (PUSH, POP).
    Stack,
    /// Control transfer (CALL, RET, JMP, JEQ, JNE).
    Branch,
    /// Console output (PRN, PRA).
    Io,
    /// Everything else (HLT).
    System,
}

impl InstructionClass {
    /// Classifies an opcode from its metadata bits and identity.
    pub const fn of(opcode: u8) -> Self {
        if opcode & ALU_MASK != 0 {
            return Self::Alu;
        }
        if opcode & SETS_PC_MASK != 0 {
            return Self::Branch;
        }
        match opcode {
            opcodes::LDI | opcodes::ST => Self::LoadStore,
            opcodes::PUSH | opcodes::POP => Self::Stack,
            opcodes::PRN | opcodes::PRA => Self::Io,
            _ => Self::System,
        }
    }
}
