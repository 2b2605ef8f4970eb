//! Query session controller.
//!
//! Owns the [`QuerySession`] and drives its single state-transition
//! operation: submit a query, wait for the backend (bounded), and apply the
//! settlement.
//!
//! The submit is split in three steps so an event loop can keep the session
//! responsive while the request runs:
//!
//! 1. [`QuerySessionController::begin_submit`]: guard + `Loading`, returns a [`PendingQuery`]
//! 2. [`PendingQuery::run`]: the network call, owns nothing from the session
//! 3. [`QuerySessionController::settle`]: apply the result (ignored if stale)
//!
//! [`QuerySessionController::submit_query`] composes the three for callers
//! that simply await.

use crate::config::SessionConfig;
use crate::ports::query_logger::{NoQueryLogger, QueryEvent, QueryLogger};
use crate::ports::session_observer::{NoSessionObserver, SessionObserver};
use crate::ports::staffing_gateway::{ChatRequest, GatewayError, StaffingGateway};
use hr_scout_domain::util::shorten;
use hr_scout_domain::{
    Candidate, QuerySession, QueryTicket, SessionStatus, Settlement, SettlementResult,
    SubmitRejected,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// An accepted submit whose request has not been sent yet.
///
/// Independent of the session: it can be moved into a spawned task and
/// the resulting [`Settlement`] handed back to
/// [`QuerySessionController::settle`].
pub struct PendingQuery {
    ticket: QueryTicket,
    request: ChatRequest,
    gateway: Arc<dyn StaffingGateway>,
    timeout: Duration,
}

impl PendingQuery {
    pub fn ticket(&self) -> &QueryTicket {
        &self.ticket
    }

    pub fn request(&self) -> &ChatRequest {
        &self.request
    }

    /// Issue the one outbound call and resolve it into a settlement.
    ///
    /// Never fails: every error class becomes a failure settlement. No retry.
    pub async fn run(self) -> Settlement {
        debug!(
            "Sending query (generation {}, top_k {})",
            self.ticket.generation(),
            self.request.top_k
        );

        let outcome = match tokio::time::timeout(self.timeout, self.gateway.chat(&self.request)).await
        {
            Ok(result) => result,
            Err(_) => Err(GatewayError::Timeout(self.timeout)),
        };

        match outcome {
            Ok(answer) => {
                debug!("Query returned {} candidates", answer.candidates.len());
                Settlement::success(&self.ticket, answer)
            }
            Err(e) => {
                warn!("Query failed: {}", e);
                Settlement::failure(&self.ticket, e.detail())
            }
        }
    }
}

/// Controller for the single query session behind the UI.
///
/// Exposes `submit_query()`, `clear()`, and read access to the session.
/// At most one request is in flight: a submit while `Loading` is rejected.
pub struct QuerySessionController {
    session: QuerySession,
    gateway: Arc<dyn StaffingGateway>,
    config: SessionConfig,
    observer: Arc<dyn SessionObserver>,
    query_logger: Arc<dyn QueryLogger>,
}

impl QuerySessionController {
    pub fn new(gateway: Arc<dyn StaffingGateway>, config: SessionConfig) -> Self {
        Self {
            session: QuerySession::new(),
            gateway,
            config,
            observer: Arc::new(NoSessionObserver),
            query_logger: Arc::new(NoQueryLogger),
        }
    }

    /// Create with a session observer.
    pub fn with_observer(mut self, observer: Arc<dyn SessionObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Create with a query logger.
    pub fn with_query_logger(mut self, logger: Arc<dyn QueryLogger>) -> Self {
        self.query_logger = logger;
        self
    }

    // ==================== Read access ====================

    pub fn session(&self) -> &QuerySession {
        &self.session
    }

    pub fn query_text(&self) -> &str {
        self.session.query_text()
    }

    pub fn status(&self) -> SessionStatus {
        self.session.status()
    }

    pub fn answer(&self) -> Option<&str> {
        self.session.answer()
    }

    pub fn candidates(&self) -> &[Candidate] {
        self.session.candidates()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.session.error_message()
    }

    /// Whether the submit trigger should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.session.is_loading() && !self.session.query_text().trim().is_empty()
    }

    // ==================== Transitions ====================

    pub fn set_query_text(&mut self, text: impl Into<String>) {
        self.session.set_query_text(text);
    }

    /// Accept a submit and enter `Loading`.
    pub fn begin_submit(&mut self) -> Result<PendingQuery, SubmitRejected> {
        let ticket = match self.session.begin_submit() {
            Ok(ticket) => ticket,
            Err(rejected) => {
                debug!("Submit rejected: {}", rejected);
                return Err(rejected);
            }
        };

        info!(
            "Submitting query: {}",
            shorten(ticket.query().as_str(), 100)
        );
        self.query_logger.log(QueryEvent::new(
            "query_submitted",
            json!({
                "generation": ticket.generation(),
                "query": ticket.query().as_str(),
                "top_k": self.config.top_k,
            }),
        ));
        self.observer.on_loading(ticket.query());

        let request = ChatRequest::new(ticket.query().as_str(), self.config.top_k);
        Ok(PendingQuery {
            ticket,
            request,
            gateway: Arc::clone(&self.gateway),
            timeout: self.config.timeout,
        })
    }

    /// Apply a settlement. Returns `false` if it was stale and ignored.
    pub fn settle(&mut self, settlement: Settlement) -> bool {
        let generation = settlement.generation;
        let event_payload = match &settlement.result {
            SettlementResult::Success(answer) => json!({
                "generation": generation,
                "outcome": "success",
                "candidates": answer.candidates.len(),
            }),
            SettlementResult::Failure { detail } => json!({
                "generation": generation,
                "outcome": "failure",
                "detail": detail,
            }),
        };

        if !self.session.settle(settlement) {
            warn!(
                "Ignoring settlement for abandoned request (generation {}, current {})",
                generation,
                self.session.generation()
            );
            return false;
        }

        info!("Query settled: {}", self.session.status());
        self.query_logger
            .log(QueryEvent::new("query_settled", event_payload));
        self.observer.on_settled(&self.session);
        true
    }

    /// Submit the current query text and wait for its settlement.
    ///
    /// Returns the resulting status, or the rejection if the submit was a
    /// no-op.
    pub async fn submit_query(&mut self) -> Result<SessionStatus, SubmitRejected> {
        let pending = self.begin_submit()?;
        let settlement = pending.run().await;
        self.settle(settlement);
        Ok(self.session.status())
    }

    /// Reset the session to `Idle`, discarding interest in any in-flight request.
    pub fn clear(&mut self) {
        let was_loading = self.session.is_loading();
        self.session.clear();
        if was_loading {
            info!("Session cleared while a query was in flight; its result will be discarded");
        }
        self.query_logger.log(QueryEvent::new(
            "session_cleared",
            json!({ "abandoned_request": was_loading }),
        ));
        self.observer.on_cleared();
    }
}
