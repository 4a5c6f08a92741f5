/// Console output buffering.
pub mod console;

/// Main memory bounds and loading.
pub mod memory;
