//! Configuration system for the LS-8 simulator.
//!
//! This module defines the configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline machine constants (start PC, initial stack pointer).
//! 2. **Structures:** Hierarchical config for general and system settings.
//!
//! Configuration is supplied as JSON (`ls8 --config run.json`) or use `Config::default()`.
//! Every field has a serde default, so partial documents are accepted.

use serde::Deserialize;

use crate::common::constants::{PC_INIT, SP_INIT};

/// Default configuration constants for the simulator.
mod defaults {
    /// Address execution starts from.
    pub const START_PC: u8 = super::PC_INIT as u8;

    /// Stack pointer value at reset.
    pub const INITIAL_SP: u8 = super::SP_INIT;
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use ls8_core::config::Config;
///
/// let config = Config::default();
/// assert!(!config.general.trace_instructions);
/// assert_eq!(config.system.initial_sp, 0xF4);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use ls8_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "system": { "initial_sp": 128 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.start_pc, 0);
/// assert_eq!(config.system.initial_sp, 0x80);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Machine reset state
    #[serde(default)]
    pub system: SystemConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the document is malformed or a field
    /// has the wrong type (for example a stack pointer above 255).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Print a one-line machine trace to stderr before every instruction
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u8,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    const fn default_start_pc() -> u8 {
        defaults::START_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
        }
    }
}

/// Machine reset state.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Initial stack pointer (`R7`)
    #[serde(default = "SystemConfig::default_initial_sp")]
    pub initial_sp: u8,
}

impl SystemConfig {
    /// Returns the default stack pointer.
    const fn default_initial_sp() -> u8 {
        defaults::INITIAL_SP
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            initial_sp: defaults::INITIAL_SP,
        }
    }
}
