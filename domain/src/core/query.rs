//! Query value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A staffing query ready to be sent to the backend (Value Object)
///
/// Always holds the trimmed text and is never empty. Construct it with
/// [`Query::try_new`] or `TryFrom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Query {
    text: String,
}

impl Query {
    /// Try to create a query, returning `None` if it is empty after trimming
    pub fn try_new(text: impl AsRef<str>) -> Option<Self> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                text: trimmed.to_string(),
            })
        }
    }

    /// Get the trimmed query text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume and return the inner text
    pub fn into_string(self) -> String {
        self.text
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl TryFrom<String> for Query {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Query::try_new(s).ok_or(DomainError::EmptyQuery)
    }
}

impl TryFrom<&str> for Query {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Query::try_new(s).ok_or(DomainError::EmptyQuery)
    }
}

impl From<Query> for String {
    fn from(q: Query) -> Self {
        q.text
    }
}
