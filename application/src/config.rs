//! Application-level configuration.
//!
//! Controls how the session controller talks to the backend: how many
//! candidates to ask for and how long to wait for an answer.

use std::time::Duration;

/// Default result-count hint sent with every query
pub const DEFAULT_TOP_K: u32 = 5;

/// Default ceiling on the wait for a backend response
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// Session behavior configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Hint for how many candidates the backend should return at most.
    pub top_k: u32,
    /// Maximum time to wait for a response before settling as a timeout.
    pub timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

impl SessionConfig {
    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }

    /// Set the timeout in whole seconds.
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout = Duration::from_secs(seconds);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.top_k, 5);
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_builders() {
        let config = SessionConfig::default()
            .with_top_k(3)
            .with_timeout_seconds(10);
        assert_eq!(config.top_k, 3);
        assert_eq!(config.timeout.as_secs(), 10);
    }
}
