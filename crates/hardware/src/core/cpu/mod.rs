//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire machine state. It coordinates the following:
//! 1. **State Management:** Maintains registers, program counter, flags, and run state.
//! 2. **Memory:** Owns the 256-byte main memory the program is loaded into.
//! 3. **Devices:** Owns the console that PRN and PRA write to.
//! 4. **Observability:** Statistics, per-step tracing, and state dumps.

/// Instruction execution orchestration (fetch, dispatch, retire).
pub mod execution;

/// Per-opcode instruction handlers.
pub mod instructions;

/// Operand fetch and stack access.
pub mod memory;

use crate::common::RegisterFile;
use crate::common::error::LoadError;
use crate::config::Config;
use crate::core::arch::{Flags, RunState};
use crate::isa::disasm;
use crate::soc::{Console, Memory};
use crate::stats::SimStats;

/// Main CPU structure containing all machine state.
///
/// One `Cpu` lives for exactly one program run; there is no reset.
#[derive(Debug)]
pub struct Cpu {
    /// General-purpose registers (`R7` is the stack pointer).
    pub regs: RegisterFile,
    /// Program Counter.
    pub pc: usize,
    /// Outcome of the most recent CMP, `None` before the first one.
    pub flags: Option<Flags>,
    /// Main memory.
    pub ram: Memory,
    /// Console output device.
    pub console: Console,
    /// Whether the CPU is still executing.
    pub state: RunState,
    /// Print a machine trace line to stderr before each instruction.
    pub trace: bool,
    /// Performance statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a new CPU instance with the specified configuration.
    ///
    /// Memory is zeroed; load a program with [`Cpu::load_program`].
    pub fn new(config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(config.system.initial_sp),
            pc: config.general.start_pc as usize,
            flags: None,
            ram: Memory::new(),
            console: Console::new(),
            state: RunState::Running,
            trace: config.general.trace_instructions,
            stats: SimStats::default(),
        }
    }

    /// Copies a program image into memory at address 0.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Empty`] or [`LoadError::TooLarge`]; memory is unchanged on error.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), LoadError> {
        self.ram.load(program)?;
        tracing::debug!(bytes = program.len(), "program loaded");
        Ok(())
    }

    /// Whether HLT has executed.
    pub fn is_halted(&self) -> bool {
        self.state == RunState::Halted
    }

    /// Disassembles the instruction at `addr` without trapping on out-of-range operands.
    pub fn disassemble_at(&self, addr: usize) -> String {
        disasm::disassemble(
            self.ram.peek(addr),
            self.ram.peek(addr + 1),
            self.ram.peek(addr + 2),
        )
    }

    /// Formats the classic one-line machine trace.
    ///
    /// `TRACE: PC | op a b | R0 .. R7 | FL | disassembly`, all in hex.
    pub fn trace_line(&self) -> String {
        let regs: String = self
            .regs
            .as_array()
            .iter()
            .map(|val| format!(" {val:02X}"))
            .collect();
        format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |{regs} | {:02X} | {}",
            self.pc,
            self.ram.peek(self.pc),
            self.ram.peek(self.pc + 1),
            self.ram.peek(self.pc + 2),
            Flags::bits_of(self.flags),
            self.disassemble_at(self.pc)
        )
    }

    /// Renders the PC, flags, and registers for a fatal-error report.
    pub fn dump_state(&self) -> String {
        format!(
            "PC = {:#04x} ({})  FL = {:03b}  state = {}\n{}",
            self.pc,
            self.disassemble_at(self.pc),
            Flags::bits_of(self.flags),
            self.state,
            self.regs
        )
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
