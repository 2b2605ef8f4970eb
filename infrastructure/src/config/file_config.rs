//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use hr_scout_application::SessionConfig;
use hr_scout_application::config::{DEFAULT_TIMEOUT_SECONDS, DEFAULT_TOP_K};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export OutputFormat from domain for convenience
pub use hr_scout_domain::OutputFormat as FileOutputFormat;

/// Backend address used when nothing else is configured
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("backend.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("backend.top_k cannot be 0")]
    InvalidTopK,

    #[error("backend.url cannot be empty")]
    EmptyBackendUrl,

    #[error("backend.url must start with http:// or https:// (got '{0}')")]
    UnsupportedScheme(String),
}

/// Raw backend configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Base address of the staffing backend
    pub url: String,
    /// Ceiling on the wait for a response, in seconds
    pub timeout_seconds: u64,
    /// Result-count hint sent with every query
    pub top_k: u32,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_BACKEND_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            top_k: DEFAULT_TOP_K,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<FileOutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show a spinner while a query is loading
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Path of the JSONL query log; disabled when unset
    pub query_log: Option<String>,
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub backend: FileBackendConfig,
    pub output: FileOutputConfig,
    pub repl: FileReplConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let url = self.backend.url.trim();
        if url.is_empty() {
            return Err(ConfigValidationError::EmptyBackendUrl);
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigValidationError::UnsupportedScheme(url.to_string()));
        }
        if self.backend.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.backend.top_k == 0 {
            return Err(ConfigValidationError::InvalidTopK);
        }
        Ok(())
    }

    /// Session behavior derived from `[backend]`
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::default()
            .with_top_k(self.backend.top_k)
            .with_timeout_seconds(self.backend.timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = FileConfig::default();
        assert_eq!(config.backend.url, "http://localhost:8000");
        assert_eq!(config.backend.timeout_seconds, 60);
        assert_eq!(config.backend.top_k, 5);
        assert!(config.output.color);
        assert!(config.repl.show_progress);
        assert!(config.logging.query_log.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [backend]
            url = "https://hr.example.com"

            [output]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.backend.url, "https://hr.example.com");
        assert_eq!(config.backend.top_k, 5);
        assert_eq!(config.output.format, Some(FileOutputFormat::Json));
        assert!(config.output.color);
    }

    #[test]
    fn test_validation_errors() {
        let mut config = FileConfig::default();
        config.backend.timeout_seconds = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));

        let mut config = FileConfig::default();
        config.backend.top_k = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTopK));

        let mut config = FileConfig::default();
        config.backend.url = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyBackendUrl));

        let mut config = FileConfig::default();
        config.backend.url = "ftp://files".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_session_config() {
        let mut config = FileConfig::default();
        config.backend.top_k = 8;
        config.backend.timeout_seconds = 15;
        let session = config.session_config();
        assert_eq!(session.top_k, 8);
        assert_eq!(session.timeout.as_secs(), 15);
    }
}
