//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::RosterConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file, workspace file and environment.
    pub fn load(workspace_root: &Path) -> Result<RosterConfig, ConfigError> {
        MergeService::load(workspace_root)
    }

    /// Load configuration from a specific file, skipping the global and
    /// workspace files.
    pub fn load_from_file(path: &Path) -> Result<RosterConfig, ConfigError> {
        MergeService::load_from_file(path)
    }

    /// Pick the explicit file when one is given, otherwise the standard layers.
    pub fn load_for(
        workspace_root: &Path,
        explicit: Option<&Path>,
    ) -> Result<RosterConfig, ConfigError> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => Self::load(workspace_root),
        }
    }
}
