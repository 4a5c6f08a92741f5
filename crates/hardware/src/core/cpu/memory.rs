//! Operand Fetch and Stack Access.
//!
//! This module implements the memory-facing helpers instruction handlers share:
//! 1. **Operand Fetch:** Reads the bytes following the opcode at PC.
//! 2. **Register Operands:** Resolves an operand byte through the register file.
//! 3. **Stack:** Push and pop through `R7`, growing downward in main memory.

use super::Cpu;
use crate::common::error::Trap;

impl Cpu {
    /// Reads the operand byte `n` positions after the opcode.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::OutOfRange`] if the operand lies past the end of memory.
    #[inline]
    pub fn operand(&self, n: usize) -> Result<u8, Trap> {
        self.ram.read(self.pc + n)
    }

    /// Reads the register named by operand `n`.
    ///
    /// # Returns
    ///
    /// The register index and its current value.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::OutOfRange`] if the operand is past the end of memory
    /// or names a register outside `R0`-`R7`.
    #[inline]
    pub fn reg_operand(&self, n: usize) -> Result<(usize, u8), Trap> {
        let idx = self.operand(n)? as usize;
        let val = self.regs.get(idx)?;
        Ok((idx, val))
    }

    /// Decrements SP, then stores `val` at the new top of stack.
    ///
    /// SP wraps modulo 256 like any register.
    ///
    /// # Errors
    ///
    /// Propagates a memory trap from the store.
    pub fn push(&mut self, val: u8) -> Result<(), Trap> {
        let sp = self.regs.sp().wrapping_sub(1);
        self.regs.set_sp(sp);
        self.ram.write(sp as usize, val)
    }

    /// Loads the top of stack, then increments SP.
    ///
    /// # Errors
    ///
    /// Propagates a memory trap from the load.
    pub fn pop(&mut self) -> Result<u8, Trap> {
        let sp = self.regs.sp();
        let val = self.ram.read(sp as usize)?;
        self.regs.set_sp(sp.wrapping_add(1));
        Ok(val)
    }
}
