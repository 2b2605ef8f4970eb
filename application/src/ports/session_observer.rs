//! Session observer port
//!
//! Lets the presentation layer react to session transitions (show a
//! spinner while loading, stop it on settlement) without the controller
//! knowing how anything is displayed.

use hr_scout_domain::{Query, QuerySession};

/// Callback for query session transitions
///
/// Implementations live in the presentation layer.
pub trait SessionObserver: Send + Sync {
    /// Called when a submit is accepted and the session enters `Loading`
    fn on_loading(&self, _query: &Query) {}

    /// Called after a settlement has been applied
    fn on_settled(&self, _session: &QuerySession) {}

    /// Called after `clear()`
    fn on_cleared(&self) {}
}

/// No-op observer for when nothing needs to be displayed
pub struct NoSessionObserver;

impl SessionObserver for NoSessionObserver {}
