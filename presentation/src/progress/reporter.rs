//! Progress reporting for query sessions

use colored::Colorize;
use hr_scout_application::SessionObserver;
use hr_scout_domain::{Query, QuerySession};
use hr_scout_domain::util::shorten;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner while a query is loading
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn finish(&self, message: String) {
        if let Ok(mut guard) = self.spinner.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_with_message(message);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionObserver for ProgressReporter {
    fn on_loading(&self, query: &Query) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix("Searching...");
        pb.set_message(shorten(query.as_str(), 50).into_owned());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.spinner.lock()
            && let Some(previous) = guard.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_settled(&self, session: &QuerySession) {
        let message = if session.status().is_failure() {
            format!("{}", "failed".red())
        } else {
            format!(
                "{} ({} candidates)",
                "done".green(),
                session.candidates().len()
            )
        };
        self.finish(message);
    }

    fn on_cleared(&self) {
        self.finish(format!("{}", "cleared".yellow()));
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress;

impl SessionObserver for SimpleProgress {
    fn on_loading(&self, query: &Query) {
        eprintln!("{} {} {}", "->".cyan(), "Searching...".bold(), query);
    }

    fn on_settled(&self, session: &QuerySession) {
        if session.status().is_failure() {
            eprintln!("  {} failed", "x".red());
        } else {
            eprintln!(
                "  {} {} candidates",
                "v".green(),
                session.candidates().len()
            );
        }
    }

    fn on_cleared(&self) {
        eprintln!("  {} cleared", "-".yellow());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hr_scout_domain::{QueryAnswer, Settlement};

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        let query = Query::try_new("python").unwrap();

        reporter.on_loading(&query);
        assert!(reporter.spinner.lock().unwrap().is_some());

        let mut session = QuerySession::new();
        session.set_query_text("python");
        let ticket = session.begin_submit().unwrap();
        session.settle(Settlement::success(&ticket, QueryAnswer::default()));
        reporter.on_settled(&session);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_clear_without_spinner_is_noop() {
        let reporter = ProgressReporter::new();
        reporter.on_cleared();
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
