//! Use cases (application services)
//!
//! - [`submit_query`]: the query session controller (submit / settle / clear)
//! - [`search_employees`]: structured employee directory search
//! - [`check_health`]: backend liveness probe

pub mod check_health;
pub mod search_employees;
pub mod submit_query;
