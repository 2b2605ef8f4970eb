//! Candidate domain.
//!
//! - [`entities::Candidate`]: one employee profile matched by the backend
//! - [`filter::EmployeeFilter`]: structured criteria for a direct employee search

pub mod entities;
pub mod filter;
