//! `reqwest`-backed implementation of [`StaffingGateway`].

use super::wire;
use async_trait::async_trait;
use hr_scout_application::{ChatRequest, GatewayError, HealthStatus, StaffingGateway};
use hr_scout_domain::{Candidate, EmployeeFilter, QueryAnswer};
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("hr-scout/", env!("CARGO_PKG_VERSION"));

/// HTTP gateway to the staffing backend.
///
/// Holds one shared [`reqwest::Client`] whose request timeout is the
/// configured ceiling, so transport-level timeouts surface as
/// [`GatewayError::Timeout`] as well.
pub struct HttpStaffingGateway {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpStaffingGateway {
    /// Create a gateway for `base_url` (e.g. `http://localhost:8000`).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GatewayError::RequestFailed(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        debug!("HTTP staffing gateway targeting {}", base_url);

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn classify(&self, error: reqwest::Error) -> GatewayError {
        if error.is_timeout() {
            GatewayError::Timeout(self.timeout)
        } else if error.is_connect() {
            GatewayError::Unreachable(error.to_string())
        } else {
            GatewayError::RequestFailed(error.to_string())
        }
    }

    /// Send a request and return the success body, or map the failure.
    async fn fetch(&self, request: reqwest::RequestBuilder) -> Result<Vec<u8>, GatewayError> {
        let response = request.send().await.map_err(|e| self.classify(e))?;
        let status = response.status();
        let body = response.bytes().await.map_err(|e| self.classify(e))?;

        if status.is_success() {
            return Ok(body.to_vec());
        }

        let error = match wire::decode_error_detail(&body) {
            Some(detail) => GatewayError::Rejected {
                status: status.as_u16(),
                detail,
            },
            None => GatewayError::Status(status.as_u16()),
        };
        warn!("Backend returned {}: {}", status, error);
        Err(error)
    }
}

#[async_trait]
impl StaffingGateway for HttpStaffingGateway {
    async fn chat(&self, request: &ChatRequest) -> Result<QueryAnswer, GatewayError> {
        let body = self
            .fetch(self.client.post(self.url("/chat")).json(request))
            .await?;
        Ok(wire::decode_chat_answer(&body))
    }

    async fn health(&self) -> Result<HealthStatus, GatewayError> {
        let body = self.fetch(self.client.get(self.url("/health"))).await?;
        Ok(wire::decode_health(&body))
    }

    async fn search_employees(
        &self,
        filter: &EmployeeFilter,
    ) -> Result<Vec<Candidate>, GatewayError> {
        let body = self
            .fetch(
                self.client
                    .get(self.url("/employees/search"))
                    .query(&search_params(filter)),
            )
            .await?;
        Ok(wire::decode_employee_list(&body))
    }
}

/// Query-string pairs for an employee search; `skill` repeats per entry.
fn search_params(filter: &EmployeeFilter) -> Vec<(&'static str, String)> {
    let mut params: Vec<(&'static str, String)> = filter
        .skills
        .iter()
        .map(|s| ("skill", s.clone()))
        .collect();
    if let Some(years) = filter.min_experience {
        params.push(("min_experience", years.to_string()));
    }
    if let Some(availability) = &filter.availability {
        params.push(("availability", availability.clone()));
    }
    params
}
