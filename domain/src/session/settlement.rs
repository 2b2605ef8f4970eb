//! Settlement value objects

use super::answer::QueryAnswer;
use super::ticket::QueryTicket;

/// Result half of a [`Settlement`]
#[derive(Debug, Clone, PartialEq)]
pub enum SettlementResult {
    Success(QueryAnswer),
    /// Human-readable detail, without the `"Error: "` prefix
    Failure { detail: String },
}

/// Terminal resolution of one remote call, tagged with its generation
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    pub generation: u64,
    pub result: SettlementResult,
}

impl Settlement {
    pub fn success(ticket: &QueryTicket, answer: QueryAnswer) -> Self {
        Self {
            generation: ticket.generation(),
            result: SettlementResult::Success(answer),
        }
    }

    pub fn failure(ticket: &QueryTicket, detail: impl Into<String>) -> Self {
        Self {
            generation: ticket.generation(),
            result: SettlementResult::Failure {
                detail: detail.into(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.result, SettlementResult::Success(_))
    }
}
