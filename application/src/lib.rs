//! Application layer for hr-scout
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionConfig;
pub use ports::{
    query_logger::{NoQueryLogger, QueryEvent, QueryLogger},
    session_observer::{NoSessionObserver, SessionObserver},
    staffing_gateway::{ChatRequest, GatewayError, HealthStatus, StaffingGateway},
};
pub use use_cases::check_health::CheckHealthUseCase;
pub use use_cases::search_employees::SearchEmployeesUseCase;
pub use use_cases::submit_query::{PendingQuery, QuerySessionController};
