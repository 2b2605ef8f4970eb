//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Query cannot be empty")]
    EmptyQuery,

    #[error("Invalid employee filter: {0}")]
    InvalidFilter(String),
}

impl DomainError {
    /// Check if this error comes from an empty or whitespace-only query
    pub fn is_empty_query(&self) -> bool {
        matches!(self, DomainError::EmptyQuery)
    }
}
