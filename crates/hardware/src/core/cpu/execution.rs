//! Main Execution Loop.
//!
//! This module implements the core execution cycle of the CPU. It performs the following:
//! 1. **Fetch:** Reads the opcode byte at PC.
//! 2. **Dispatch:** Looks the opcode up in the static dispatch table and runs its handler.
//! 3. **Retire:** Records statistics for the instruction the handler completed.
//! 4. **Observability:** Optional per-step machine trace on stderr.

use super::Cpu;
use crate::common::error::Trap;
use crate::core::arch::RunState;
use crate::isa::dispatch::DISPATCH;
use crate::isa::instruction::InstructionBits;

impl Cpu {
    /// Executes one instruction.
    ///
    /// The handler owns the PC update; this function never advances PC itself.
    /// Stepping a halted CPU is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::IllegalInstruction`] if the opcode has no handler, or
    /// whatever trap the handler raises. No further instructions execute after
    /// a trap.
    pub fn step(&mut self) -> Result<(), Trap> {
        if self.state == RunState::Halted {
            return Ok(());
        }

        let pc = self.pc;
        let opcode = self.ram.read(pc)?;
        let Some(handler) = DISPATCH.lookup(opcode) else {
            tracing::debug!(pc, opcode, "illegal instruction");
            return Err(Trap::IllegalInstruction { opcode, pc });
        };

        if self.trace {
            eprintln!("{}", self.trace_line());
        }

        if let Err(trap) = handler(self, opcode) {
            tracing::debug!(pc, opcode, %trap, "instruction trapped");
            return Err(trap);
        }

        let taken = opcode.sets_pc() && self.pc != pc + opcode.width();
        self.stats.record(opcode, taken);
        tracing::trace!(pc, opcode, next_pc = self.pc, "retired");
        Ok(())
    }

    /// Runs until HLT executes or a trap is raised.
    ///
    /// There is no instruction budget: a program that never halts loops
    /// forever unless PC walks off the end of memory.
    ///
    /// # Errors
    ///
    /// Returns the first trap raised.
    pub fn run(&mut self) -> Result<(), Trap> {
        while self.state == RunState::Running {
            self.step()?;
        }
        Ok(())
    }
}
