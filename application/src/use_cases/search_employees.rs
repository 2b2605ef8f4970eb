//! Search Employees use case.
//!
//! Structured lookup over the employee directory (skills, minimum
//! experience, availability). Unlike the free-text query it does not touch
//! the session: results are returned to the caller directly.

use crate::ports::staffing_gateway::{GatewayError, StaffingGateway};
use hr_scout_domain::{Candidate, EmployeeFilter};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Use case for a direct employee search.
#[derive(Clone)]
pub struct SearchEmployeesUseCase {
    gateway: Arc<dyn StaffingGateway>,
    timeout: Duration,
}

impl SearchEmployeesUseCase {
    pub fn new(gateway: Arc<dyn StaffingGateway>, timeout: Duration) -> Self {
        Self { gateway, timeout }
    }

    /// Run the search with the same bounded wait as a query.
    pub async fn execute(&self, filter: &EmployeeFilter) -> Result<Vec<Candidate>, GatewayError> {
        info!(
            "Searching employees: skills={:?} min_experience={:?} availability={:?}",
            filter.skills, filter.min_experience, filter.availability
        );

        let employees = tokio::time::timeout(self.timeout, self.gateway.search_employees(filter))
            .await
            .map_err(|_| GatewayError::Timeout(self.timeout))??;

        debug!("Employee search returned {} records", employees.len());
        Ok(employees)
    }
}
