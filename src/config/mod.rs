//! Configuration
//!
//! Layered configuration built with the `config` crate. Sources, lowest to
//! highest precedence: built-in defaults, the global file, the workspace file,
//! and `ROSTER__*` environment variables.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;
pub mod workspace;

pub use facade::ConfigLoader;
pub use paths::xdg_root as xdg;
pub use workspace::storage_paths::StorageConfig;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Interactive shell behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Ask before update, delete and load
    #[serde(default = "default_true")]
    pub confirm_destructive: bool,

    /// Offer to save when leaving the shell
    #[serde(default = "default_true")]
    pub prompt_save_on_exit: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            confirm_destructive: true,
            prompt_save_on_exit: true,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub shell: ShellConfig,
}
