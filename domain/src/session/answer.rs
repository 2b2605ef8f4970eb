//! Successful answer value object

use crate::candidate::entities::Candidate;
use serde::{Deserialize, Serialize};

/// What the backend returned for a successful query
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryAnswer {
    /// Free-text answer; empty is valid
    pub answer: String,
    /// Ranked candidates in the order received
    pub candidates: Vec<Candidate>,
}

impl QueryAnswer {
    pub fn new(answer: impl Into<String>, candidates: Vec<Candidate>) -> Self {
        Self {
            answer: answer.into(),
            candidates,
        }
    }
}
