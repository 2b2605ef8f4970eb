//! REPL line parsing

use hr_scout_domain::{DomainError, EmployeeFilter};

/// One line of REPL input
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Free text: becomes the query text and is submitted
    Query(String),
    Clear,
    Health,
    Search(EmployeeFilter),
    Status,
    Help,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line. Returns `None` for blank input.
    pub fn parse(line: &str) -> Option<Result<Self, DomainError>> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        if !line.starts_with('/') {
            return Some(Ok(ReplCommand::Query(line.to_string())));
        }

        let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let parsed = match command {
            "/quit" | "/exit" | "/q" => Ok(ReplCommand::Quit),
            "/help" | "/h" | "/?" => Ok(ReplCommand::Help),
            "/clear" | "/c" => Ok(ReplCommand::Clear),
            "/health" => Ok(ReplCommand::Health),
            "/status" => Ok(ReplCommand::Status),
            "/search" | "/s" => EmployeeFilter::parse_terms(rest).map(ReplCommand::Search),
            other => Ok(ReplCommand::Unknown(other.to_string())),
        };
        Some(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> ReplCommand {
        ReplCommand::parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_blank_lines() {
        assert!(ReplCommand::parse("").is_none());
        assert!(ReplCommand::parse("   ").is_none());
    }

    #[test]
    fn test_free_text_is_query() {
        assert_eq!(
            parse("  Find Python developers  "),
            ReplCommand::Query("Find Python developers".to_string())
        );
    }

    #[test]
    fn test_commands() {
        assert_eq!(parse("/quit"), ReplCommand::Quit);
        assert_eq!(parse("/q"), ReplCommand::Quit);
        assert_eq!(parse("/clear"), ReplCommand::Clear);
        assert_eq!(parse("/health"), ReplCommand::Health);
        assert_eq!(parse("/status"), ReplCommand::Status);
        assert_eq!(parse("/?"), ReplCommand::Help);
        assert_eq!(parse("/nope"), ReplCommand::Unknown("/nope".to_string()));
    }

    #[test]
    fn test_search_command() {
        assert_eq!(
            parse("/search skill=python min=3"),
            ReplCommand::Search(EmployeeFilter::new().with_skill("python").with_min_experience(3))
        );
        assert_eq!(parse("/search"), ReplCommand::Search(EmployeeFilter::new()));
        assert!(ReplCommand::parse("/search min=x").unwrap().is_err());
    }
}
