//! Staffing gateway port
//!
//! Defines the interface for talking to the staffing backend. The matching
//! and ranking logic lives entirely behind this port.

use async_trait::async_trait;
use hr_scout_domain::{Candidate, EmployeeFilter, QueryAnswer};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during gateway operations
///
/// The `Display` text of each variant is the human-readable detail shown to
/// the user after the `"Error: "` prefix.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Network error: {0}")]
    Unreachable(String),

    #[error("Request timed out after {} seconds", .0.as_secs())]
    Timeout(Duration),

    /// Non-success status with a structured `{ "detail": … }` body
    #[error("{detail}")]
    Rejected { status: u16, detail: String },

    /// Non-success status without a parseable body
    #[error("Request failed with status code {0}")]
    Status(u16),

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

impl GatewayError {
    /// Human-readable detail for a failed settlement
    pub fn detail(&self) -> String {
        self.to_string()
    }

    /// HTTP status attached to this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Rejected { status, .. } | GatewayError::Status(status) => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, GatewayError::Timeout(_))
    }
}

/// Body of a chat request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    pub top_k: u32,
}

impl ChatRequest {
    pub fn new(query: impl Into<String>, top_k: u32) -> Self {
        Self {
            query: query.into(),
            top_k,
        }
    }
}

/// Backend liveness report
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Gateway to the staffing backend
///
/// This port defines how the application layer reaches the backend.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait StaffingGateway: Send + Sync {
    /// Send a free-text query and receive an answer with ranked candidates.
    ///
    /// Malformed success bodies must degrade to defaults instead of failing.
    async fn chat(&self, request: &ChatRequest) -> Result<QueryAnswer, GatewayError>;

    /// Probe backend liveness.
    async fn health(&self) -> Result<HealthStatus, GatewayError>;

    /// Structured search over the employee directory.
    async fn search_employees(
        &self,
        filter: &EmployeeFilter,
    ) -> Result<Vec<Candidate>, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_text() {
        assert_eq!(
            GatewayError::Rejected {
                status: 400,
                detail: "bad request".to_string()
            }
            .detail(),
            "bad request"
        );
        assert_eq!(
            GatewayError::Timeout(Duration::from_secs(60)).detail(),
            "Request timed out after 60 seconds"
        );
        assert_eq!(
            GatewayError::Status(502).detail(),
            "Request failed with status code 502"
        );
        assert_eq!(
            GatewayError::Unreachable("connection refused".to_string()).detail(),
            "Network error: connection refused"
        );
    }

    #[test]
    fn test_status_accessor() {
        assert_eq!(GatewayError::Status(500).status(), Some(500));
        assert_eq!(
            GatewayError::Rejected {
                status: 422,
                detail: String::new()
            }
            .status(),
            Some(422)
        );
        assert_eq!(GatewayError::Timeout(Duration::from_secs(1)).status(), None);
    }

    #[test]
    fn test_chat_request_wire_shape() {
        let json = serde_json::to_value(ChatRequest::new("python", 5)).unwrap();
        assert_eq!(json, serde_json::json!({ "query": "python", "top_k": 5 }));
    }

    #[test]
    fn test_health_status() {
        assert!(HealthStatus { status: "ok".to_string() }.is_ok());
        assert!(!HealthStatus::default().is_ok());
    }
}
