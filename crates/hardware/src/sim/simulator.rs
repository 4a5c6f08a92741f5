//! Simulator: owns the CPU and the host output stream side-by-side.
//!
//! The CPU only ever writes into its console buffer. After every instruction
//! the simulator drains that buffer to the host writer, so output reaches the
//! host in execution order even when the run ends in a trap.

use std::io::{self, Write};

use crate::common::error::{LoadError, SimError};
use crate::config::Config;
use crate::core::Cpu;

/// Top-level simulator: CPU state + host output.
#[derive(Debug)]
pub struct Simulator<W: Write = io::Stdout> {
    /// CPU architectural state (registers, memory, console, stats).
    pub cpu: Cpu,
    out: W,
}

impl Simulator<io::Stdout> {
    /// Creates a simulator that writes program output to stdout.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the program is empty or larger than memory.
    pub fn new(config: &Config, program: &[u8]) -> Result<Self, LoadError> {
        Self::with_output(config, program, io::stdout())
    }
}

impl<W: Write> Simulator<W> {
    /// Creates a simulator that writes program output to `out`.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the program is empty or larger than memory.
    pub fn with_output(config: &Config, program: &[u8], out: W) -> Result<Self, LoadError> {
        let mut cpu = Cpu::new(config);
        cpu.load_program(program)?;
        Ok(Self { cpu, out })
    }

    /// Executes one instruction and forwards its console output.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Trap`] if the instruction trapped, or
    /// [`SimError::Io`] if the host writer failed.
    pub fn tick(&mut self) -> Result<(), SimError> {
        let result = self.cpu.step();
        self.cpu.console.flush_to(&mut self.out)?;
        result.map_err(SimError::from)
    }

    /// Runs the program until it halts.
    ///
    /// # Errors
    ///
    /// Returns the first trap or host I/O error; output produced before the
    /// failure has already been written.
    pub fn run(&mut self) -> Result<(), SimError> {
        let outcome = self.run_to_halt();
        self.out.flush()?;
        if let Err(err) = &outcome {
            tracing::debug!(pc = self.cpu.pc, %err, "run aborted");
        } else {
            tracing::debug!(
                instructions = self.cpu.stats.instructions_retired,
                "run complete"
            );
        }
        outcome
    }

    /// Whether HLT has executed.
    pub fn is_halted(&self) -> bool {
        self.cpu.is_halted()
    }

    /// The host writer.
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the simulator, returning the host writer.
    pub fn into_output(self) -> W {
        self.out
    }

    fn run_to_halt(&mut self) -> Result<(), SimError> {
        while !self.cpu.is_halted() {
            self.tick()?;
        }
        Ok(())
    }
}
