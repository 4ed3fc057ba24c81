//! Configuration system for the Pep/9 simulator.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** The reset stack pointer of the Pep/9 operating system layout.
//! 2. **Structures:** General run settings (tracing, reset stack pointer, instruction budget).
//! 3. **Loading:** JSON deserialization from a string or a file.
//!
//! Every field is optional in JSON; `{}` yields `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants::RESET_SP;

    /// Stack pointer applied by `initialize`.
    pub const INITIAL_SP: u16 = RESET_SP;
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Emit a trace event for every executed instruction.
    #[serde(default)]
    pub trace_instructions: bool,

    /// SP after `initialize`.
    #[serde(default = "GeneralConfig::default_initial_sp")]
    pub initial_sp: u16,

    /// Stop the simulator after this many instructions (`None` = unbounded).
    #[serde(default)]
    pub max_instructions: Option<u64>,
}

impl GeneralConfig {
    /// Returns the default initial stack pointer.
    const fn default_initial_sp() -> u16 {
        defaults::INITIAL_SP
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            initial_sp: defaults::INITIAL_SP,
            max_instructions: None,
        }
    }
}
