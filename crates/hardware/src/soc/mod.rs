//! System-on-Chip (SoC) Components.
//!
//! This module organizes the components the core is wired to: the flat main
//! memory and the console output device.

/// Output devices.
pub mod devices;

/// Main memory.
pub mod memory;

pub use devices::Console;
pub use memory::Memory;
