//! Infrastructure layer for hr-scout
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the HTTP staffing gateway, configuration
//! file loading, and the JSONL query log.

pub mod config;
pub mod http;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileBackendConfig, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat, FileReplConfig,
};
pub use http::HttpStaffingGateway;
pub use logging::JsonlQueryLogger;
