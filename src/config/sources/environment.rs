//! Environment variable source.
//!
//! `ROSTER__STORAGE__DATA_FILE=/tmp/x.json` sets `storage.data_file`. The
//! double underscore keeps these apart from the single-underscore
//! `ROSTER_LOG*` variables read by the logging module.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment};

pub const ENV_PREFIX: &str = "ROSTER";
pub const ENV_SEPARATOR: &str = "__";

fn source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
}

/// Layer the environment on top of everything already in `builder`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(source()))
}
