//! Accepted-submit ticket

use crate::core::query::Query;

/// Issued by [`QuerySession::begin_submit`](super::entities::QuerySession::begin_submit)
///
/// Carries the query to send and the generation the eventual settlement
/// must match to be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    generation: u64,
    query: Query,
}

impl QueryTicket {
    pub(crate) fn new(generation: u64, query: Query) -> Self {
        Self { generation, query }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &Query {
        &self.query
    }
}
