//! HTTP adapter for the staffing backend.
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | chat | `POST` | `/chat` |
//! | health | `GET` | `/health` |
//! | search employees | `GET` | `/employees/search` |
//!
//! [`wire`] holds the body decoding rules; [`gateway`] the `reqwest`
//! client and error classification.

mod gateway;
pub mod wire;

pub use gateway::HttpStaffingGateway;
