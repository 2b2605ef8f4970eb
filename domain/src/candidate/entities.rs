//! Candidate entities

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque identifier of a candidate
///
/// The backend may send either a number or a string. It is only used as a
/// rendering key; uniqueness is assumed, not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CandidateId {
    Number(serde_json::Number),
    Text(String),
}

impl Default for CandidateId {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl std::fmt::Display for CandidateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CandidateId::Number(n) => write!(f, "{}", n),
            CandidateId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for CandidateId {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<&str> for CandidateId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// An employee profile returned as a match for a query (Value Object)
///
/// Every field is display-only and defaults when missing from the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub experience_years: i64,
    pub availability: String,
    /// Order as received
    pub skills: Vec<String>,
    /// Order as received
    pub projects: Vec<String>,
    pub match_score: f64,
}

impl Candidate {
    pub fn new(id: impl Into<CandidateId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_experience_years(mut self, years: i64) -> Self {
        self.experience_years = years;
        self
    }

    pub fn with_availability(mut self, availability: impl Into<String>) -> Self {
        self.availability = availability.into();
        self
    }

    pub fn with_skills<S: Into<String>>(mut self, skills: impl IntoIterator<Item = S>) -> Self {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_projects<S: Into<String>>(mut self, projects: impl IntoIterator<Item = S>) -> Self {
        self.projects = projects.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_match_score(mut self, score: f64) -> Self {
        self.match_score = score;
        self
    }

    /// Best-effort extraction from an arbitrary JSON value.
    ///
    /// Never fails: fields that are missing or have an unexpected type fall
    /// back to their empty default. Numbers and booleans inside `skills` or
    /// `projects` are kept as text; other non-string entries are dropped.
    pub fn from_json_lenient(value: &Value) -> Self {
        let id = match value.get("id") {
            Some(Value::Number(n)) => CandidateId::Number(n.clone()),
            Some(Value::String(s)) => CandidateId::Text(s.clone()),
            _ => CandidateId::default(),
        };

        let experience_years = value
            .get("experience_years")
            .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
            .unwrap_or(0);

        Self {
            id,
            name: text_field(value, "name"),
            experience_years,
            availability: text_field(value, "availability"),
            skills: text_list(value, "skills"),
            projects: text_list(value, "projects"),
            match_score: value
                .get("match_score")
                .and_then(Value::as_f64)
                .unwrap_or(0.0),
        }
    }
}

fn text_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(scalar_to_text)
        .unwrap_or_default()
}

fn text_list(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(scalar_to_text).collect())
        .unwrap_or_default()
}

fn scalar_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_candidate() {
        let c: Candidate = serde_json::from_value(json!({
            "id": 1,
            "name": "Ana",
            "experience_years": 4,
            "availability": "Full-time",
            "skills": ["Python", "Django"],
            "projects": ["EHR"],
            "match_score": 0.92
        }))
        .unwrap();

        assert_eq!(c.id, CandidateId::from(1));
        assert_eq!(c.name, "Ana");
        assert_eq!(c.experience_years, 4);
        assert_eq!(c.skills, vec!["Python", "Django"]);
        assert_eq!(c.projects, vec!["EHR"]);
        assert!((c.match_score - 0.92).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_fields_default() {
        let c: Candidate = serde_json::from_value(json!({ "name": "Bo" })).unwrap();
        assert_eq!(c.id, CandidateId::default());
        assert_eq!(c.experience_years, 0);
        assert!(c.skills.is_empty());
        assert!(c.availability.is_empty());
    }

    #[test]
    fn test_string_id_is_kept() {
        let c: Candidate = serde_json::from_value(json!({ "id": "emp-7" })).unwrap();
        assert_eq!(c.id.to_string(), "emp-7");
    }

    #[test]
    fn test_lenient_extraction_tolerates_wrong_types() {
        let c = Candidate::from_json_lenient(&json!({
            "id": {"nested": true},
            "name": 42,
            "experience_years": "many",
            "skills": ["Go", 3, null, {"x": 1}],
            "projects": "not-a-list",
            "match_score": "high"
        }));

        assert_eq!(c.id, CandidateId::default());
        assert_eq!(c.name, "42");
        assert_eq!(c.experience_years, 0);
        assert_eq!(c.skills, vec!["Go", "3"]);
        assert!(c.projects.is_empty());
        assert_eq!(c.match_score, 0.0);
    }

    #[test]
    fn test_lenient_extraction_truncates_float_years() {
        let c = Candidate::from_json_lenient(&json!({ "experience_years": 3.7 }));
        assert_eq!(c.experience_years, 3);
    }

    #[test]
    fn test_lenient_extraction_of_non_object() {
        assert_eq!(Candidate::from_json_lenient(&json!("junk")), Candidate::default());
    }
}
