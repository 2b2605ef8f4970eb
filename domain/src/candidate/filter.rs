//! Employee search filter value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Structured criteria for a direct employee search
///
/// All criteria are optional. The backend requires every listed skill to be
/// present (case-insensitive), experience to be at least `min_experience`,
/// and availability to match exactly (case-insensitive).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeFilter {
    pub skills: Vec<String>,
    pub min_experience: Option<u32>,
    pub availability: Option<String>,
}

impl EmployeeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.push(skill.into());
        self
    }

    pub fn with_min_experience(mut self, years: u32) -> Self {
        self.min_experience = Some(years);
        self
    }

    pub fn with_availability(mut self, availability: impl Into<String>) -> Self {
        self.availability = Some(availability.into());
        self
    }

    /// True when no criterion is set (the backend then returns everyone)
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.min_experience.is_none() && self.availability.is_none()
    }

    /// Parse `key=value` terms, e.g. `skill=python min=3 avail=busy`.
    ///
    /// Recognised keys: `skill`/`skills` (comma-separated allowed),
    /// `min`/`min_experience`, `avail`/`availability`.
    pub fn parse_terms(input: &str) -> Result<Self, DomainError> {
        let mut filter = Self::new();
        for term in input.split_whitespace() {
            let (key, value) = term
                .split_once('=')
                .ok_or_else(|| DomainError::InvalidFilter(format!("expected key=value, got '{}'", term)))?;
            if value.is_empty() {
                return Err(DomainError::InvalidFilter(format!("empty value for '{}'", key)));
            }
            match key {
                "skill" | "skills" => {
                    filter.skills.extend(
                        value
                            .split(',')
                            .filter(|s| !s.is_empty())
                            .map(str::to_string),
                    );
                }
                "min" | "min_experience" => {
                    let years = value.parse().map_err(|_| {
                        DomainError::InvalidFilter(format!("'{}' is not a number of years", value))
                    })?;
                    filter.min_experience = Some(years);
                }
                "avail" | "availability" => filter.availability = Some(value.to_string()),
                other => {
                    return Err(DomainError::InvalidFilter(format!("unknown key '{}'", other)));
                }
            }
        }
        Ok(filter)
    }
}
