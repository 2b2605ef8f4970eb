//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod query_logger;
pub mod session_observer;
pub mod staffing_gateway;
