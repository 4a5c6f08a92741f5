//! ALU logical and comparison operations.

use crate::core::arch::Flags;

/// Bitwise AND.
#[inline]
pub const fn and(a: u8, b: u8) -> u8 {
    a & b
}

/// Compares two unsigned register values.
///
/// The result always names exactly one relation.
#[inline]
pub fn compare(a: u8, b: u8) -> Flags {
    Flags::from(a.cmp(&b))
}
