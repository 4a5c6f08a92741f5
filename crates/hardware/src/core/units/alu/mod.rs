//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 8-bit integer ALU shared by the ADD, MUL, AND,
//! and CMP instructions. Every operation is a pure function of its operands;
//! the caller writes the result back to a register or to the flags.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Mul (wrapping modulo 256)
//! - [`logic`]:      And, Cmp

/// Integer arithmetic operations (add, multiply).
pub mod arithmetic;

/// Bitwise logical and comparison operations (and, compare).
pub mod logic;

use std::fmt;
use std::str::FromStr;

use crate::common::error::Trap;
use crate::core::arch::Flags;
use crate::isa::instruction::InstructionBits;

/// ALU identifier of ADD.
const ID_ADD: u8 = 0b0_0000;
/// ALU identifier of MUL.
const ID_MUL: u8 = 0b0_0010;
/// ALU identifier of CMP.
const ID_CMP: u8 = 0b0_0111;
/// ALU identifier of AND.
const ID_AND: u8 = 0b0_1000;

/// Operations the ALU implements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// `a + b` modulo 256.
    Add,
    /// `a * b` modulo 256.
    Mul,
    /// Bitwise `a & b`.
    And,
    /// Numeric comparison of `a` with `b`.
    Cmp,
}

impl AluOp {
    /// Decodes the ALU operation selected by an opcode's identifier bits.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::UnsupportedOperation`] if the opcode is not flagged as an
    /// ALU instruction or its identifier names an operation this ALU lacks.
    pub fn decode(opcode: u8) -> Result<Self, Trap> {
        if !opcode.is_alu() {
            return Err(Trap::UnsupportedOperation(format!("{opcode:#010b}")));
        }
        match opcode.identifier() {
            ID_ADD => Ok(Self::Add),
            ID_MUL => Ok(Self::Mul),
            ID_AND => Ok(Self::And),
            ID_CMP => Ok(Self::Cmp),
            _ => Err(Trap::UnsupportedOperation(format!("{opcode:#010b}"))),
        }
    }

    /// Assembly mnemonic of the operation.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Mul => "MUL",
            Self::And => "AND",
            Self::Cmp => "CMP",
        }
    }
}

impl FromStr for AluOp {
    type Err = Trap;

    /// Parses an operation name (`"ADD"`, `"MUL"`, `"AND"`, `"CMP"`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ADD" => Ok(Self::Add),
            "MUL" => Ok(Self::Mul),
            "AND" => Ok(Self::And),
            "CMP" => Ok(Self::Cmp),
            _ => Err(Trap::UnsupportedOperation(s.to_string())),
        }
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What an ALU operation produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluResult {
    /// A value for the destination register.
    Value(u8),
    /// A new flags state; no register is written.
    Flags(Flags),
}

/// Arithmetic Logic Unit (ALU) for 8-bit integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::arch::Flags;
    /// use ls8_core::core::units::alu::{Alu, AluOp, AluResult};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 250, 10), AluResult::Value(4));
    /// assert_eq!(Alu::execute(AluOp::Mul, 200, 2), AluResult::Value(144));
    /// assert_eq!(Alu::execute(AluOp::And, 0b1100, 0b1010), AluResult::Value(0b1000));
    /// assert_eq!(Alu::execute(AluOp::Cmp, 3, 7), AluResult::Flags(Flags::Less));
    /// ```
    pub fn execute(op: AluOp, a: u8, b: u8) -> AluResult {
        match op {
            AluOp::Add => AluResult::Value(arithmetic::add(a, b)),
            AluOp::Mul => AluResult::Value(arithmetic::mul(a, b)),
            AluOp::And => AluResult::Value(logic::and(a, b)),
            AluOp::Cmp => AluResult::Flags(logic::compare(a, b)),
        }
    }
}
