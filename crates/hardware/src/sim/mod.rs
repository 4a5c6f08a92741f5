//! Simulation utilities and program loading.
//!
//! Provides the text program loader and the `Simulator` that couples a CPU to
//! a host output stream.

/// Text program loader.
pub mod loader;

/// Top-level simulator driver.
pub mod simulator;
