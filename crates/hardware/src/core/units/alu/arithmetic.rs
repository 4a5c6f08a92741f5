//! ALU arithmetic operations.
//!
//! Registers are eight bits wide and there is no carry or overflow flag, so
//! both operations simply wrap modulo 256.

/// `a + b` modulo 256.
#[inline]
pub const fn add(a: u8, b: u8) -> u8 {
    a.wrapping_add(b)
}

/// `a * b` modulo 256.
#[inline]
pub const fn mul(a: u8, b: u8) -> u8 {
    a.wrapping_mul(b)
}
