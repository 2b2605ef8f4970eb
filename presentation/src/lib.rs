//! Presentation layer for hr-scout
//!
//! This crate contains CLI definitions, candidate cards, console
//! formatters, progress reporters, and the interactive query REPL.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use output::card::CandidateCard;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use repl::{QueryRepl, ReplCommand};
