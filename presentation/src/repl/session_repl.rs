//! REPL (Read-Eval-Print Loop) for interactive staffing queries

use crate::config::{OutputConfig, ReplConfig};
use crate::output::console::ConsoleFormatter;
use crate::repl::commands::ReplCommand;
use colored::Colorize;
use hr_scout_application::{CheckHealthUseCase, QuerySessionController, SearchEmployeesUseCase};
use hr_scout_domain::{EmployeeFilter, Settlement, SubmitRejected};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use tracing::{debug, warn};

const HISTORY_CAPACITY: usize = 1000;

/// Interactive query REPL
///
/// Each plain line replaces the query text and is submitted. The request
/// runs on a spawned task; pressing Ctrl-C while it is loading clears the
/// session and leaves the request to finish on its own, unobserved.
pub struct QueryRepl {
    controller: QuerySessionController,
    health: CheckHealthUseCase,
    search: SearchEmployeesUseCase,
    output: OutputConfig,
    config: ReplConfig,
    backend_url: String,
}

impl QueryRepl {
    pub fn new(
        controller: QuerySessionController,
        health: CheckHealthUseCase,
        search: SearchEmployeesUseCase,
    ) -> Self {
        Self {
            controller,
            health,
            search,
            output: OutputConfig::default(),
            config: ReplConfig::default(),
            backend_url: String::new(),
        }
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Backend address shown in the welcome banner
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = url.into();
        self
    }

    /// Run the interactive REPL until `/quit` or Ctrl-D
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();

        if let Some(path) = self.config.history_path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
                Ok(history) => line_editor = line_editor.with_history(Box::new(history)),
                Err(e) => warn!("History disabled ({}): {}", path.display(), e),
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("hr-scout".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let command = match ReplCommand::parse(&line) {
                        None => continue,
                        Some(Ok(command)) => command,
                        Some(Err(e)) => {
                            println!("{}", e.to_string().red());
                            continue;
                        }
                    };
                    if self.dispatch(command).await {
                        break;
                    }
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Handle one command. Returns true if the REPL should exit.
    async fn dispatch(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Query(text) => self.process_query(text).await,
            ReplCommand::Clear => {
                self.controller.clear();
                println!("{}", "Cleared.".dimmed());
            }
            ReplCommand::Health => self.check_health().await,
            ReplCommand::Search(filter) => self.search_employees(&filter).await,
            ReplCommand::Status => {
                println!("Status: {}", self.controller.status());
                if !self.controller.query_text().is_empty() {
                    println!("Query:  {}", self.controller.query_text());
                }
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        false
    }

    async fn process_query(&mut self, text: String) {
        println!();
        self.controller.set_query_text(text);

        let pending = match self.controller.begin_submit() {
            Ok(pending) => pending,
            Err(SubmitRejected::EmptyQuery) => return,
            Err(rejected @ SubmitRejected::Busy) => {
                println!("{}", rejected.to_string().yellow());
                return;
            }
        };

        let ticket = pending.ticket().clone();
        let mut task = tokio::spawn(pending.run());

        tokio::select! {
            joined = &mut task => {
                let settlement = joined.unwrap_or_else(|e| {
                    warn!("Query task failed: {}", e);
                    Settlement::failure(&ticket, format!("Request failed: {}", e))
                });
                self.controller.settle(settlement);
            }
            _ = tokio::signal::ctrl_c() => {
                debug!("Interrupted while loading (generation {})", ticket.generation());
                self.controller.clear();
                println!("{}", "Cancelled; the pending result will be ignored.".dimmed());
                println!();
                return;
            }
        }

        print!(
            "{}",
            ConsoleFormatter::format(self.controller.session(), self.output.format)
        );
        println!();
    }

    async fn check_health(&self) {
        match self.health.execute().await {
            Ok(status) if status.is_ok() => {
                println!("{} {}", "Backend is healthy:".green(), self.backend_url)
            }
            Ok(status) => println!(
                "{} status {:?}",
                "Backend responded but is not ok:".yellow(),
                status.status
            ),
            Err(e) => println!("{} {}", "Backend unavailable:".red(), e),
        }
    }

    async fn search_employees(&self, filter: &EmployeeFilter) {
        match self.search.execute(filter).await {
            Ok(found) if found.is_empty() => println!("{}", "No employees matched.".dimmed()),
            Ok(found) => print!("{}", ConsoleFormatter::format_candidates(&found)),
            Err(e) => println!("{}", format!("Error: {}", e).red()),
        }
        println!();
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          hr-scout - staffing queries        │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        if !self.backend_url.is_empty() {
            println!("Backend: {}", self.backend_url);
            println!();
        }
        println!("Type a question, e.g. \"Find Python developers with 3+ years\".");
        println!("Type /help for commands.");
        println!();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  <text>                 - Ask the backend (Ctrl-C cancels while searching)");
        println!("  /search skill=a,b min=N avail=X");
        println!("                         - Filtered employee search");
        println!("  /clear, /c             - Reset the session");
        println!("  /status                - Show the session status");
        println!("  /health                - Check the backend");
        println!("  /help, /h, /?          - Show this help");
        println!("  /quit, /exit, /q       - Exit");
        println!();
    }
}
