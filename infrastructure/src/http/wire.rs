//! Response body decoding.
//!
//! Success bodies are decoded best-effort: a typed decode is tried first and
//! anything it rejects falls back to field-by-field extraction from a
//! `serde_json::Value`. Decoding a success body never fails.

use hr_scout_application::HealthStatus;
use hr_scout_domain::{Candidate, QueryAnswer};
use serde_json::Value;
use tracing::warn;

/// Decode a `/chat` success body into a [`QueryAnswer`].
///
/// A missing `candidates` field yields an empty list; a missing or
/// non-string `answer` yields an empty answer.
pub fn decode_chat_answer(body: &[u8]) -> QueryAnswer {
    if let Ok(answer) = serde_json::from_slice::<QueryAnswer>(body) {
        return answer;
    }

    let value = match serde_json::from_slice::<Value>(body) {
        Ok(v) => v,
        Err(e) => {
            warn!("Chat response is not JSON ({}); treating as empty answer", e);
            return QueryAnswer::default();
        }
    };

    warn!("Chat response has an unexpected shape; extracting fields best-effort");
    let answer = match value.get("answer") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    };

    QueryAnswer {
        answer,
        candidates: lenient_list(value.get("candidates")),
    }
}

/// Decode an `/employees/search` body (a bare JSON array).
pub fn decode_employee_list(body: &[u8]) -> Vec<Candidate> {
    if let Ok(list) = serde_json::from_slice::<Vec<Candidate>>(body) {
        return list;
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(value) => lenient_list(Some(&value)),
        Err(e) => {
            warn!("Employee search response is not JSON: {}", e);
            Vec::new()
        }
    }
}

/// Decode a `/health` body. Unreadable bodies report an empty status.
pub fn decode_health(body: &[u8]) -> HealthStatus {
    serde_json::from_slice(body).unwrap_or_default()
}

/// Extract the server-provided `detail` from an error body.
///
/// Returns `None` when the body is not JSON, has no `detail`, or the detail
/// is empty. Structured details (e.g. validation error lists) are rendered
/// as compact JSON.
pub fn decode_error_detail(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("detail")? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn lenient_list(value: Option<&Value>) -> Vec<Candidate> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().map(Candidate::from_json_lenient).collect())
        .unwrap_or_default()
}
