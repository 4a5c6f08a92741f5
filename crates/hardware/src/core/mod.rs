//! Core processor implementation.
//!
//! This module contains the CPU: its architectural state, the ALU, the
//! per-opcode instruction handlers, and the fetch-decode-execute loop.

/// Architecture-specific components (flags register, run state).
pub mod arch;

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
