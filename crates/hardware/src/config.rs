//! Configuration system for the LS-8 emulator.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline machine constants (initial stack pointer).
//! 2. **Structures:** `Config` and its `general` section.
//!
//! Configuration is supplied as JSON (e.g. the CLI's `--config` file) or built
//! with `Config::default()`. Every field is optional in JSON.

use serde::Deserialize;

use crate::common::constants::DEFAULT_INITIAL_SP;

/// Default configuration values.
mod defaults {
    /// Initial stack pointer loaded into `R7`.
    pub const INITIAL_SP: u8 = super::DEFAULT_INITIAL_SP;
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use ls8_core::config::Config;
///
/// let json = r#"{ "general": { "trace_instructions": true, "max_steps": 1000 } }"#;
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_steps, Some(1000));
/// assert_eq!(config.general.initial_sp, 0xF4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General emulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the document is malformed or a field
    /// has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// General emulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Print a trace line to stderr before every instruction.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Value loaded into the stack pointer (`R7`) at reset.
    #[serde(default = "GeneralConfig::default_initial_sp")]
    pub initial_sp: u8,

    /// Upper bound on executed instructions, applied by the `Simulator` only.
    #[serde(default)]
    pub max_steps: Option<u64>,
}

impl GeneralConfig {
    const fn default_initial_sp() -> u8 {
        defaults::INITIAL_SP
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            initial_sp: defaults::INITIAL_SP,
            max_steps: None,
        }
    }
}
