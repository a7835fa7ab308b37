//! Defaults layer applied beneath every other source.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Start a builder carrying the scalar defaults.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("storage.data_file", "students.json")?
        .set_default("logging.enabled", true)?
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "file")?
        .set_default("logging.color", true)?
        .set_default("shell.confirm_destructive", true)?
        .set_default("shell.prompt_save_on_exit", true)
}
