//! Configuration file loading for hr-scout
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `HR_SCOUT_BACKEND_URL` environment variable (backend address only)
//! 2. `--config <path>` specified file
//! 3. Project root: `./hr-scout.toml` or `./.hr-scout.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/hr-scout/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_BACKEND_URL, FileBackendConfig, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat, FileReplConfig,
};
pub use loader::{BACKEND_URL_ENV, ConfigLoader};
