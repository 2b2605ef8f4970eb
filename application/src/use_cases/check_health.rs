//! Check Health use case.

use crate::ports::staffing_gateway::{GatewayError, HealthStatus, StaffingGateway};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Probes the backend's `/health` endpoint with a bounded wait.
#[derive(Clone)]
pub struct CheckHealthUseCase {
    gateway: Arc<dyn StaffingGateway>,
    timeout: Duration,
}

impl CheckHealthUseCase {
    pub fn new(gateway: Arc<dyn StaffingGateway>, timeout: Duration) -> Self {
        Self { gateway, timeout }
    }

    pub async fn execute(&self) -> Result<HealthStatus, GatewayError> {
        let status = tokio::time::timeout(self.timeout, self.gateway.health())
            .await
            .map_err(|_| GatewayError::Timeout(self.timeout))??;
        debug!("Backend health: {}", status.status);
        Ok(status)
    }
}
