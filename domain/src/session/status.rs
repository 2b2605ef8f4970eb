//! Session status value objects

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the last request settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Failure,
}

/// Lifecycle status of a [`QuerySession`](super::entities::QuerySession)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Nothing in flight, nothing settled (initial state and after clear)
    #[default]
    Idle,
    /// Exactly one request is outstanding
    Loading,
    /// The last request resolved
    Settled(Outcome),
}

impl SessionStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionStatus::Loading)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, SessionStatus::Settled(Outcome::Failure))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Idle => "idle",
            SessionStatus::Loading => "loading",
            SessionStatus::Settled(Outcome::Success) => "settled",
            SessionStatus::Settled(Outcome::Failure) => "failed",
        }
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a submit was not accepted. State is unchanged in both cases.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("Query is empty")]
    EmptyQuery,

    #[error("A query is already in progress")]
    Busy,
}
