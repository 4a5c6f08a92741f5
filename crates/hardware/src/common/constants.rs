//! Machine geometry constants.
//!
//! The LS-8 has a flat 256-byte address space and eight 8-bit registers, the
//! last of which doubles as the stack pointer.

/// Number of addressable memory cells.
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 8;

/// Register index reserved for the stack pointer.
pub const REG_SP: usize = 7;

/// Initial stack pointer value.
///
/// The stack grows downward from here; addresses `0xF4..=0xFF` stay free for
/// memory-mapped use.
pub const SP_INIT: u8 = 0xF4;

/// Initial program counter.
pub const PC_INIT: usize = 0;
