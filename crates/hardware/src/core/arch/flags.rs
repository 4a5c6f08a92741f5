//! LS-8 Flags Register.
//!
//! The flags hold the outcome of the most recent CMP. Exactly one of
//! Equal, Greater, or Less is active after a compare; before the first
//! compare no flag is set.

use std::cmp::Ordering;

/// Flags register bit for less-than (`FL` layout `00000LGE`).
pub const FL_LESS: u8 = 0b100;
/// Flags register bit for greater-than.
pub const FL_GREATER: u8 = 0b010;
/// Flags register bit for equal.
pub const FL_EQUAL: u8 = 0b001;

/// Result of a compare.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flags {
    /// Operands were equal.
    Equal,
    /// First operand was greater.
    Greater,
    /// First operand was less.
    Less,
}

impl Flags {
    /// Encodes the flags in the `00000LGE` register layout.
    pub const fn bits(self) -> u8 {
        match self {
            Self::Equal => FL_EQUAL,
            Self::Greater => FL_GREATER,
            Self::Less => FL_LESS,
        }
    }

    /// Encodes an optional flags state, with no flag set as 0.
    pub const fn bits_of(flags: Option<Self>) -> u8 {
        match flags {
            Some(f) => f.bits(),
            None => 0,
        }
    }
}

impl From<Ordering> for Flags {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
            Ordering::Less => Self::Less,
        }
    }
}
