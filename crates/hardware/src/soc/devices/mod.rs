//! Output Devices.
//!
//! The LS-8 has no memory-mapped I/O; its only device is the console that
//! PRN and PRA write to.

/// Console transmit buffer.
pub mod console;

pub use console::Console;
