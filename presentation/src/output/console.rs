//! Console output formatter for query sessions

use crate::output::card::CandidateCard;
use colored::Colorize;
use hr_scout_domain::{Candidate, OutputFormat, QuerySession, SessionStatus};

const RULE_WIDTH: usize = 60;

/// Formats query sessions and candidate lists for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a session in the requested output format
    pub fn format(session: &QuerySession, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format_full(session),
            OutputFormat::Answer => Self::format_answer_only(session),
            OutputFormat::Json => Self::format_json(session),
        }
    }

    /// Answer block followed by candidate cards
    pub fn format_full(session: &QuerySession) -> String {
        let mut output = String::new();

        if session.is_loading() {
            output.push_str(&format!("{}\n\n", "Searching...".dimmed()));
        }

        if let Some(answer) = session.answer().filter(|a| !a.is_empty()) {
            output.push_str(&Self::section_header("Answer"));
            if session.status().is_failure() {
                output.push_str(&format!("{}\n", answer.red()));
            } else {
                output.push_str(answer);
                output.push('\n');
            }
        }

        if !session.candidates().is_empty() {
            output.push('\n');
            output.push_str(&Self::format_candidates(session.candidates()));
        }

        if output.is_empty() && session.status() == SessionStatus::Idle {
            output.push_str(&format!("{}\n", "No query yet.".dimmed()));
        }

        output
    }

    /// Only the answer text (concise output)
    pub fn format_answer_only(session: &QuerySession) -> String {
        let mut output = session.answer().unwrap_or_default().to_string();
        output.push('\n');
        output
    }

    /// Format as JSON
    pub fn format_json(session: &QuerySession) -> String {
        serde_json::to_string_pretty(session).unwrap_or_else(|_| "{}".to_string())
    }

    /// "Candidates" section with one card per candidate, in order
    pub fn format_candidates(candidates: &[Candidate]) -> String {
        let mut output = Self::section_header("Candidates");
        for card in CandidateCard::render_all(candidates) {
            output.push_str(&Self::format_card(&card));
        }
        output
    }

    /// Format a single card block
    pub fn format_card(card: &CandidateCard) -> String {
        let title = if card.title.is_empty() {
            "(unnamed)".to_string()
        } else {
            card.title.clone()
        };
        let pad = RULE_WIDTH.saturating_sub(title.chars().count() + card.score.chars().count() + 4);

        format!(
            "\n{} {} {}\n   {}\n   {} {}\n   {} {}\n",
            "──".yellow(),
            title.bold(),
            format!("{} {}", "─".repeat(pad).yellow(), card.score.dimmed()),
            card.subtitle,
            "Skills:".cyan().bold(),
            card.skills,
            "Projects:".cyan().bold(),
            card.projects,
        )
    }

    fn section_header(title: &str) -> String {
        format!("{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}
