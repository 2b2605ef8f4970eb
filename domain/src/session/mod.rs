//! Query session domain.
//!
//! - [`entities::QuerySession`]: the single mutable session behind the UI
//! - [`status::SessionStatus`]: Idle / Loading / Settled
//! - [`ticket::QueryTicket`]: proof that a submit was accepted
//! - [`settlement::Settlement`]: terminal resolution of one request

pub mod answer;
pub mod entities;
pub mod settlement;
pub mod status;
pub mod ticket;
