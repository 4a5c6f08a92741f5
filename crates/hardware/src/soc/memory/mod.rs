//! Main Memory.
//!
//! This module provides the LS-8's 256-byte flat address space. It performs:
//! 1. **Storage:** One `u8` per cell, shared by code and data (Von Neumann).
//! 2. **Bounds Checking:** Any address outside `0..256` traps; there is no wraparound.
//! 3. **Program Loading:** Copies a program image to address 0.

use crate::common::constants::MEMORY_SIZE;
use crate::common::error::{LoadError, Trap};

/// The 256-byte main memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Creates a zero-filled memory.
    pub const fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Reads the byte at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::OutOfRange`] if `addr >= 256`.
    #[inline]
    pub fn read(&self, addr: usize) -> Result<u8, Trap> {
        self.cells.get(addr).copied().ok_or_else(|| Trap::memory(addr))
    }

    /// Writes `val` to `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::OutOfRange`] if `addr >= 256`.
    #[inline]
    pub fn write(&mut self, addr: usize, val: u8) -> Result<(), Trap> {
        let cell = self.cells.get_mut(addr).ok_or_else(|| Trap::memory(addr))?;
        *cell = val;
        Ok(())
    }

    /// Reads `addr` for diagnostics, yielding 0 past the end instead of trapping.
    pub fn peek(&self, addr: usize) -> u8 {
        self.cells.get(addr).copied().unwrap_or(0)
    }

    /// Copies a program image to address 0.
    ///
    /// Cells past the end of the image are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Empty`] for an empty image and
    /// [`LoadError::TooLarge`] if the image exceeds the address space.
    pub fn load(&mut self, image: &[u8]) -> Result<(), LoadError> {
        if image.is_empty() {
            return Err(LoadError::Empty);
        }
        let dest = self
            .cells
            .get_mut(..image.len())
            .ok_or(LoadError::TooLarge {
                len: image.len(),
                capacity: MEMORY_SIZE,
            })?;
        dest.copy_from_slice(image);
        Ok(())
    }

    /// The whole address space.
    pub const fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
