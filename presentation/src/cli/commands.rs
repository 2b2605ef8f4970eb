//! CLI command definitions

use clap::{Parser, ValueEnum};
use hr_scout_domain::EmployeeFilter;
use std::path::PathBuf;

/// Output format for query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Answer followed by candidate cards
    Full,
    /// Only the answer text
    Answer,
    /// JSON output
    Json,
}

impl From<OutputFormat> for hr_scout_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Answer => Self::Answer,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for hr-scout
#[derive(Parser, Debug)]
#[command(name = "hr-scout")]
#[command(author, version, about = "Find employees for a staffing need in plain language")]
#[command(long_about = r#"
hr-scout sends a free-text staffing query to the HR backend and shows the
answer together with the ranked candidate profiles it returned.

Without a query, an interactive session starts.

Configuration files are loaded from (in priority order):
1. HR_SCOUT_BACKEND_URL   Backend address override
2. --config <path>        Explicit config file
3. ./hr-scout.toml        Project-level config
4. ~/.config/hr-scout/config.toml   Global config

Example:
  hr-scout "Find Python developers with 3+ years for healthcare"
  hr-scout --search --skill python --min-experience 3
  hr-scout --repl
"#)]
pub struct Cli {
    /// The staffing query (omit to start the interactive session)
    pub query: Option<String>,

    /// Start the interactive session
    #[arg(short, long)]
    pub repl: bool,

    /// Structured employee search instead of a free-text query
    #[arg(long)]
    pub search: bool,

    /// Required skill for --search (repeatable)
    #[arg(long, value_name = "SKILL")]
    pub skill: Vec<String>,

    /// Minimum years of experience for --search
    #[arg(long, value_name = "YEARS")]
    pub min_experience: Option<u32>,

    /// Availability for --search (e.g. available, busy, notice)
    #[arg(long, value_name = "STATUS")]
    pub availability: Option<String>,

    /// Check that the backend is up and exit
    #[arg(long)]
    pub health: bool,

    /// Backend base address (overrides config and environment)
    #[arg(long, value_name = "URL")]
    pub backend_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write diagnostic logs to this file as well
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and the effective config, then exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Whether the invocation asks for a structured search
    pub fn is_search(&self) -> bool {
        self.search
            || !self.skill.is_empty()
            || self.min_experience.is_some()
            || self.availability.is_some()
    }

    /// Employee filter assembled from the search flags
    pub fn employee_filter(&self) -> EmployeeFilter {
        EmployeeFilter {
            skills: self.skill.clone(),
            min_experience: self.min_experience,
            availability: self.availability.clone(),
        }
    }
}
