//! Logging infrastructure: structured query history.
//!
//! Provides [`JsonlQueryLogger`], a JSONL file writer that implements
//! the [`QueryLogger`](hr_scout_application::QueryLogger) port.

mod jsonl_query_logger;

pub use jsonl_query_logger::JsonlQueryLogger;
