//! Domain layer for hr-scout
//!
//! This crate contains the core entities and value objects of a staffing
//! query session. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! ## Query Session
//!
//! A [`QuerySession`] tracks one user's in-progress or most recent query:
//!
//! - **Idle**: nothing submitted yet (or cleared)
//! - **Loading**: exactly one request is in flight
//! - **Settled**: the last request resolved, either with an answer and a
//!   candidate list or with an `"Error: …"` answer
//!
//! ## Candidate
//!
//! A [`Candidate`] is one employee profile returned by the backend as a
//! match for a query. Candidates are display-only value objects.

pub mod candidate;
pub mod config;
pub mod core;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use candidate::{
    entities::{Candidate, CandidateId},
    filter::EmployeeFilter,
};
pub use config::OutputFormat;
pub use core::{error::DomainError, query::Query};
pub use session::{
    answer::QueryAnswer,
    entities::QuerySession,
    settlement::{Settlement, SettlementResult},
    status::{Outcome, SessionStatus, SubmitRejected},
    ticket::QueryTicket,
};
