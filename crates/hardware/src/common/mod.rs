//! Common utilities and types used throughout the LS-8 simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Machine geometry (memory size, register count, stack pointer).
//! 2. **Error Handling:** Execution traps, loader errors, and the simulator error type.
//! 3. **Register Management:** The eight-entry general-purpose register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types and trap definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{MEMORY_SIZE, NUM_REGISTERS, REG_SP, SP_INIT};
pub use error::{LoadError, SimError, Space, Trap};
pub use reg::RegisterFile;
