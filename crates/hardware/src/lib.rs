//! LS-8 system simulator library.
//!
//! This crate implements an instruction-level simulator for the LS-8, an 8-bit
//! register machine with the following:
//! 1. **Core:** Register file, flags, ALU, and the fetch-decode-execute loop.
//! 2. **ISA:** Opcode encoding metadata, the static dispatch table, and a disassembler.
//! 3. **Devices:** The 256-byte flat memory and the console output device.
//! 4. **Simulation:** Program loader, configuration, and statistics collection.

/// Common types and constants (machine geometry, traps, register file).
pub mod common;
/// Simulator configuration (defaults and serde-backed config structures).
pub mod config;
/// CPU core (architectural state, ALU, instruction handlers, execution loop).
pub mod core;
/// Instruction set (opcodes, encoding metadata, dispatch, disassembly).
pub mod isa;
/// Program loader and top-level simulator driver.
pub mod sim;
/// System-on-chip (memory and console device).
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, flags, memory, and the console.
pub use crate::core::Cpu;
/// Top-level simulator; owns a CPU and the host output stream.
pub use crate::sim::simulator::Simulator;
