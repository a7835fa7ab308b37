//! StorageConfig and data file resolution.

use crate::config::xdg;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "students.json";

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Roster data file. Absolute paths are used as-is; other non-default
    /// values are relative to the workspace root.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

impl StorageConfig {
    /// Resolve the data file to an actual filesystem location.
    ///
    /// The default lives in the per-workspace XDG data directory so the
    /// workspace itself stays clean.
    pub fn resolve_data_file(&self, workspace_root: &Path) -> Result<PathBuf, ApiError> {
        if self.data_file.is_absolute() {
            return Ok(self.data_file.clone());
        }
        if self.data_file == default_data_file() {
            let data_dir = xdg::workspace_data_dir(workspace_root)?;
            return Ok(data_dir.join(DEFAULT_DATA_FILE));
        }
        Ok(workspace_root.join(&self.data_file))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}
