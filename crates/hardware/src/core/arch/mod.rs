//! LS-8 architecture-specific components.
//!
//! This module contains the architectural state that is not a plain register:
//! 1. **Flags:** The compare result consumed by conditional jumps.
//! 2. **Modes:** Whether the CPU is still fetching instructions.

/// Flags register.
pub mod flags;

/// Run state definitions.
pub mod mode;

pub use flags::Flags;
pub use mode::RunState;
