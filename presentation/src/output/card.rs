//! Candidate card rendering.
//!
//! Pure mapping from a [`Candidate`] to the text fields of a display card.
//! No state and no error paths: a missing field renders as empty text.

use hr_scout_domain::Candidate;
use serde::Serialize;

/// Separator used when joining skills and projects for display
pub const LIST_SEPARATOR: &str = ", ";

/// Displayable card for one candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateCard {
    /// Rendering key (the candidate id)
    pub key: String,
    pub title: String,
    /// `"{years} yrs · {availability}"`
    pub subtitle: String,
    /// `"Score: {match_score}"`
    pub score: String,
    pub skills: String,
    pub projects: String,
}

impl CandidateCard {
    pub fn render(candidate: &Candidate) -> Self {
        Self {
            key: candidate.id.to_string(),
            title: candidate.name.clone(),
            subtitle: format!(
                "{} yrs · {}",
                candidate.experience_years, candidate.availability
            ),
            score: format!("Score: {}", candidate.match_score),
            skills: candidate.skills.join(LIST_SEPARATOR),
            projects: candidate.projects.join(LIST_SEPARATOR),
        }
    }

    /// Render a list, preserving its order exactly.
    pub fn render_all(candidates: &[Candidate]) -> Vec<Self> {
        candidates.iter().map(Self::render).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_full_candidate() {
        let candidate = Candidate::new(1, "Ana")
            .with_experience_years(4)
            .with_availability("Full-time")
            .with_skills(["Python", "Django"])
            .with_projects(["EHR"])
            .with_match_score(0.92);

        let card = CandidateCard::render(&candidate);

        assert_eq!(card.key, "1");
        assert_eq!(card.title, "Ana");
        assert_eq!(card.subtitle, "4 yrs · Full-time");
        assert_eq!(card.score, "Score: 0.92");
        assert_eq!(card.skills, "Python, Django");
        assert_eq!(card.projects, "EHR");
    }

    #[test]
    fn test_render_empty_candidate() {
        let card = CandidateCard::render(&Candidate::default());
        assert_eq!(card.title, "");
        assert_eq!(card.subtitle, "0 yrs · ");
        assert_eq!(card.score, "Score: 0");
        assert_eq!(card.skills, "");
        assert_eq!(card.projects, "");
    }

    #[test]
    fn test_skill_order_is_preserved() {
        let candidate = Candidate::new("x", "Bo").with_skills(["Zig", "Ada", "Rust"]);
        assert_eq!(CandidateCard::render(&candidate).skills, "Zig, Ada, Rust");
    }

    #[test]
    fn test_render_all_keeps_order() {
        let candidates = vec![
            Candidate::new(3, "Cy").with_match_score(0.1),
            Candidate::new(1, "Ana").with_match_score(0.9),
        ];
        let titles: Vec<_> = CandidateCard::render_all(&candidates)
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec!["Cy", "Ana"]);
    }
}
