//! Query session entity

use super::answer::QueryAnswer;
use super::settlement::{Settlement, SettlementResult};
use super::status::{Outcome, SessionStatus, SubmitRejected};
use super::ticket::QueryTicket;
use crate::candidate::entities::Candidate;
use crate::core::query::Query;
use serde::Serialize;

/// Prefix of every answer synthesized from a failed settlement
pub const ERROR_PREFIX: &str = "Error: ";

/// The single mutable session tracking one user's query interaction (Entity)
///
/// All mutation goes through the transition methods:
///
/// ```text
/// Idle ──begin_submit──▶ Loading ──settle──▶ Settled(Success|Failure)
///   ▲                                          │
///   └──────────────── clear ◀──────────────────┘   (clear works from any state)
/// ```
///
/// Results from the previous round stay visible while `Loading` and are
/// replaced wholesale by the next settlement.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QuerySession {
    query_text: String,
    status: SessionStatus,
    answer: Option<String>,
    candidates: Vec<Candidate>,
    error_message: Option<String>,
    #[serde(skip)]
    generation: u64,
}

impl QuerySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn set_query_text(&mut self, text: impl Into<String>) {
        self.query_text = text.into();
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Generation of the request the session is currently waiting for
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Accept a submit and move to `Loading`.
    ///
    /// Rejected without any state change when the trimmed query text is
    /// empty or a request is already outstanding.
    pub fn begin_submit(&mut self) -> Result<QueryTicket, SubmitRejected> {
        if self.status.is_loading() {
            return Err(SubmitRejected::Busy);
        }
        let query = Query::try_new(&self.query_text).ok_or(SubmitRejected::EmptyQuery)?;

        self.generation += 1;
        self.status = SessionStatus::Loading;
        Ok(QueryTicket::new(self.generation, query))
    }

    /// Apply a settlement.
    ///
    /// Returns `false` and leaves the session untouched when the settlement
    /// belongs to a request the session no longer waits for (cleared or
    /// superseded).
    pub fn settle(&mut self, settlement: Settlement) -> bool {
        if !self.status.is_loading() || settlement.generation != self.generation {
            return false;
        }

        match settlement.result {
            SettlementResult::Success(QueryAnswer { answer, candidates }) => {
                self.answer = Some(answer);
                self.candidates = candidates;
                self.error_message = None;
                self.status = SessionStatus::Settled(Outcome::Success);
            }
            SettlementResult::Failure { detail } => {
                self.answer = Some(format!("{}{}", ERROR_PREFIX, detail));
                self.candidates = Vec::new();
                self.error_message = Some(detail);
                self.status = SessionStatus::Settled(Outcome::Failure);
            }
        }
        true
    }

    /// Reset to `Idle` from any state.
    ///
    /// An outstanding request is not cancelled, but its settlement will be
    /// ignored.
    pub fn clear(&mut self) {
        self.query_text.clear();
        self.answer = None;
        self.candidates.clear();
        self.error_message = None;
        self.status = SessionStatus::Idle;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> Candidate {
        Candidate::new(1, "Ana")
            .with_experience_years(4)
            .with_availability("Full-time")
            .with_skills(["Python", "Django"])
            .with_projects(["EHR"])
            .with_match_score(0.92)
    }

    fn loading_session(query: &str) -> (QuerySession, QueryTicket) {
        let mut session = QuerySession::new();
        session.set_query_text(query);
        let ticket = session.begin_submit().unwrap();
        (session, ticket)
    }

    #[test]
    fn test_new_session_is_idle_and_empty() {
        let session = QuerySession::new();
        assert_eq!(session.status(), SessionStatus::Idle);
        assert!(session.answer().is_none());
        assert!(session.candidates().is_empty());
        assert!(session.error_message().is_none());
    }

    #[test]
    fn test_begin_submit_moves_to_loading_with_trimmed_query() {
        let (session, ticket) = loading_session("  rust devs  ");
        assert_eq!(session.status(), SessionStatus::Loading);
        assert_eq!(ticket.query().as_str(), "rust devs");
        assert_eq!(ticket.generation(), session.generation());
    }

    #[test]
    fn test_blank_query_is_noop() {
        for text in ["", "   ", "\n\t"] {
            let mut session = QuerySession::new();
            session.set_query_text(text);
            assert_eq!(session.begin_submit(), Err(SubmitRejected::EmptyQuery));
            assert_eq!(session.status(), SessionStatus::Idle);
            assert_eq!(session.generation(), 0);
        }
    }

    #[test]
    fn test_submit_while_loading_is_rejected() {
        let (mut session, ticket) = loading_session("go");
        assert_eq!(session.begin_submit(), Err(SubmitRejected::Busy));
        assert_eq!(session.status(), SessionStatus::Loading);
        assert_eq!(session.generation(), ticket.generation());
    }

    #[test]
    fn test_success_settlement() {
        let (mut session, ticket) = loading_session("python");
        let bo = Candidate::new(2, "Bo");
        let applied = session.settle(Settlement::success(
            &ticket,
            QueryAnswer::new("A", vec![ana(), bo.clone()]),
        ));

        assert!(applied);
        assert_eq!(session.status(), SessionStatus::Settled(Outcome::Success));
        assert_eq!(session.answer(), Some("A"));
        assert_eq!(session.candidates(), &[ana(), bo]);
        assert!(session.error_message().is_none());
    }

    #[test]
    fn test_failure_settlement() {
        let (mut session, ticket) = loading_session("python");
        session.settle(Settlement::failure(&ticket, "bad request"));

        assert_eq!(session.status(), SessionStatus::Settled(Outcome::Failure));
        assert_eq!(session.answer(), Some("Error: bad request"));
        assert!(session.candidates().is_empty());
        assert_eq!(session.error_message(), Some("bad request"));
    }

    #[test]
    fn test_stale_results_visible_while_loading() {
        let (mut session, ticket) = loading_session("python");
        session.settle(Settlement::success(&ticket, QueryAnswer::new("A", vec![ana()])));

        session.begin_submit().unwrap();
        assert!(session.is_loading());
        assert_eq!(session.answer(), Some("A"));
        assert_eq!(session.candidates().len(), 1);
    }

    #[test]
    fn test_failure_clears_previous_candidates() {
        let (mut session, ticket) = loading_session("python");
        session.settle(Settlement::success(&ticket, QueryAnswer::new("A", vec![ana()])));

        let second = session.begin_submit().unwrap();
        session.settle(Settlement::failure(&second, "timeout"));
        assert!(session.candidates().is_empty());
        assert_eq!(session.answer(), Some("Error: timeout"));
    }

    #[test]
    fn test_success_after_failure_clears_error() {
        let (mut session, ticket) = loading_session("python");
        session.settle(Settlement::failure(&ticket, "down"));

        let second = session.begin_submit().unwrap();
        session.settle(Settlement::success(&second, QueryAnswer::default()));
        assert!(session.error_message().is_none());
        assert_eq!(session.answer(), Some(""));
    }

    #[test]
    fn test_clear_resets_from_any_state() {
        let mut idle = QuerySession::new();
        idle.set_query_text("typed");
        idle.clear();
        assert_eq!(idle.query_text(), "");
        assert_eq!(idle.status(), SessionStatus::Idle);

        let (mut loading, _) = loading_session("python");
        loading.clear();
        assert_eq!(loading.status(), SessionStatus::Idle);
        assert_eq!(loading.query_text(), "");

        let (mut settled, ticket) = loading_session("python");
        settled.settle(Settlement::failure(&ticket, "x"));
        settled.clear();
        assert!(settled.answer().is_none());
        assert!(settled.candidates().is_empty());
        assert!(settled.error_message().is_none());
        assert_eq!(settled.status(), SessionStatus::Idle);
    }

    #[test]
    fn test_settlement_after_clear_is_ignored() {
        let (mut session, ticket) = loading_session("python");
        session.clear();

        let applied = session.settle(Settlement::success(&ticket, QueryAnswer::new("late", vec![ana()])));
        assert!(!applied);
        assert_eq!(session.status(), SessionStatus::Idle);
        assert!(session.answer().is_none());
    }

    #[test]
    fn test_abandoned_settlement_does_not_touch_new_request() {
        let (mut session, old) = loading_session("python");
        session.clear();
        session.set_query_text("rust");
        let current = session.begin_submit().unwrap();

        assert!(!session.settle(Settlement::success(&old, QueryAnswer::new("old", vec![]))));
        assert!(session.is_loading());

        assert!(session.settle(Settlement::success(&current, QueryAnswer::new("new", vec![]))));
        assert_eq!(session.answer(), Some("new"));
    }

    #[test]
    fn test_double_settlement_applies_once() {
        let (mut session, ticket) = loading_session("python");
        assert!(session.settle(Settlement::success(&ticket, QueryAnswer::new("first", vec![]))));
        assert!(!session.settle(Settlement::failure(&ticket, "second")));
        assert_eq!(session.answer(), Some("first"));
    }

    #[test]
    fn test_session_is_reusable() {
        let mut session = QuerySession::new();
        session.set_query_text("q");
        for i in 0..3 {
            let ticket = session.begin_submit().unwrap();
            session.settle(Settlement::success(&ticket, QueryAnswer::new(format!("a{}", i), vec![])));
        }
        assert_eq!(session.answer(), Some("a2"));
        assert_eq!(session.generation(), 3);
    }

    #[test]
    fn test_serializes_without_generation() {
        let (mut session, ticket) = loading_session("python");
        session.settle(Settlement::success(&ticket, QueryAnswer::new("A", vec![ana()])));
        let json = serde_json::to_value(&session).unwrap();

        assert_eq!(json["query_text"], "python");
        assert_eq!(json["answer"], "A");
        assert_eq!(json["candidates"][0]["name"], "Ana");
        assert!(json.get("generation").is_none());
    }
}
