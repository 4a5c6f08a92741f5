//! General-Purpose Register File.
//!
//! This module implements the LS-8 register file. It performs the following:
//! 1. **Storage:** Maintains eight 8-bit registers (`R0`-`R7`).
//! 2. **Bounds Checking:** Rejects indices outside `0..8` with a trap instead of panicking.
//! 3. **Stack Pointer:** Exposes `R7` as the stack pointer, initialised to [`SP_INIT`].

use std::fmt;

use super::constants::{NUM_REGISTERS, REG_SP, SP_INIT};
use super::error::Trap;

/// The eight-entry register file.
///
/// `R7` is an ordinary register for loads and prints, but PUSH, POP, CALL,
/// and RET also use it implicitly as the stack pointer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; NUM_REGISTERS],
}

impl RegisterFile {
    /// Creates a register file with every register zeroed except the stack pointer.
    ///
    /// # Arguments
    ///
    /// * `initial_sp` - Value loaded into `R7`.
    pub const fn new(initial_sp: u8) -> Self {
        let mut regs = [0; NUM_REGISTERS];
        regs[REG_SP] = initial_sp;
        Self { regs }
    }

    /// Reads a register.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::OutOfRange`] if `idx` is not in `0..8`.
    pub fn get(&self, idx: usize) -> Result<u8, Trap> {
        self.regs.get(idx).copied().ok_or_else(|| Trap::register(idx))
    }

    /// Writes a register.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::OutOfRange`] if `idx` is not in `0..8`.
    pub fn set(&mut self, idx: usize, val: u8) -> Result<(), Trap> {
        let slot = self.regs.get_mut(idx).ok_or_else(|| Trap::register(idx))?;
        *slot = val;
        Ok(())
    }

    /// Current stack pointer.
    #[inline]
    pub const fn sp(&self) -> u8 {
        self.regs[REG_SP]
    }

    /// Replaces the stack pointer.
    #[inline]
    pub const fn set_sp(&mut self, sp: u8) {
        self.regs[REG_SP] = sp;
    }

    /// All registers in index order.
    pub const fn as_array(&self) -> &[u8; NUM_REGISTERS] {
        &self.regs
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new(SP_INIT)
    }
}

impl fmt::Display for RegisterFile {
    /// Formats the registers as `R0=00 R1=00 ... R7=F4`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, val) in self.regs.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "R{i}={val:02X}")?;
        }
        Ok(())
    }
}
