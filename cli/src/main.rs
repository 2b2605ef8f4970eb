//! CLI entrypoint for hr-scout
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use hr_scout_application::{
    CheckHealthUseCase, NoQueryLogger, NoSessionObserver, QueryLogger, QuerySessionController,
    SearchEmployeesUseCase, SessionConfig, SessionObserver, StaffingGateway,
};
use hr_scout_domain::{OutputFormat, SubmitRejected};
use hr_scout_infrastructure::{ConfigLoader, FileConfig, HttpStaffingGateway, JsonlQueryLogger};
use hr_scout_presentation::{
    Cli, ConsoleFormatter, OutputConfig, ProgressReporter, QueryRepl, ReplConfig, SimpleProgress,
};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting hr-scout");

    // === Configuration ===
    let loaded = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
    };
    let mut config = loaded.map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    if let Some(url) = &cli.backend_url {
        config.backend.url = url.clone();
    }

    if cli.show_config {
        let explicit = if cli.no_config {
            None
        } else {
            cli.config.as_deref()
        };
        println!("{}", ConfigLoader::describe_sources(explicit));
        println!("Effective configuration:\n");
        print!("{}", ConfigLoader::render_effective(&config));
        return Ok(ExitCode::SUCCESS);
    }

    config.validate().context("Invalid configuration")?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let output = OutputConfig {
        format: cli
            .output
            .map(OutputFormat::from)
            .or(config.output.format)
            .unwrap_or_default(),
        color: !cli.no_color && config.output.color,
    };
    let session_config = config.session_config();

    // === Dependency Injection ===
    let gateway: Arc<dyn StaffingGateway> = Arc::new(
        HttpStaffingGateway::new(config.backend.url.as_str(), session_config.timeout)
            .context("Failed to create HTTP client")?,
    );

    if cli.health {
        return check_health(gateway, &session_config, &config.backend.url).await;
    }

    if cli.is_search() {
        return search_employees(gateway, &session_config, &cli, output.format).await;
    }

    let query_logger = open_query_logger(&config);

    match cli.query.clone() {
        Some(query) if !cli.repl => {
            let observer = pick_observer(!cli.quiet);
            let controller = QuerySessionController::new(gateway, session_config)
                .with_observer(observer)
                .with_query_logger(query_logger);
            run_once(controller, query, output.format).await
        }
        initial => {
            let repl_config = ReplConfig {
                show_progress: config.repl.show_progress,
                history_file: config.repl.history_file.as_ref().map(PathBuf::from),
            };
            let observer = pick_observer(repl_config.show_progress && !cli.quiet);
            let timeout = session_config.timeout;
            let controller = QuerySessionController::new(Arc::clone(&gateway), session_config)
                .with_observer(observer)
                .with_query_logger(query_logger);

            let mut repl = QueryRepl::new(
                controller,
                CheckHealthUseCase::new(Arc::clone(&gateway), timeout),
                SearchEmployeesUseCase::new(gateway, timeout),
            )
            .with_output(output)
            .with_config(repl_config)
            .with_backend_url(config.backend.url.as_str());

            if let Some(query) = initial {
                warn!("Ignoring positional query in interactive mode: {}", query);
            }

            repl.run().await.context("Interactive session failed")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Console logging at the `-v` level, plus an optional non-blocking log file
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let console = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::new(level));

    // The file always records at least info
    let file_level = if verbose == 0 { "info" } else { level };

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let directory = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            let file_name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", path.display()))?;
            std::fs::create_dir_all(directory)
                .with_context(|| format!("Failed to create {}", directory.display()))?;

            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(EnvFilter::new(file_level));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn open_query_logger(config: &FileConfig) -> Arc<dyn QueryLogger> {
    match config.logging.query_log.as_deref() {
        Some(path) => match JsonlQueryLogger::open(path) {
            Some(logger) => {
                info!("Query log: {}", logger.path().display());
                Arc::new(logger)
            }
            None => Arc::new(NoQueryLogger),
        },
        None => Arc::new(NoQueryLogger),
    }
}

fn pick_observer(show_progress: bool) -> Arc<dyn SessionObserver> {
    if !show_progress {
        Arc::new(NoSessionObserver)
    } else if std::io::stderr().is_terminal() {
        Arc::new(ProgressReporter::new())
    } else {
        Arc::new(SimpleProgress)
    }
}

/// Submit a single query and print the settled session
async fn run_once(
    mut controller: QuerySessionController,
    query: String,
    format: OutputFormat,
) -> Result<ExitCode> {
    controller.set_query_text(query);

    match controller.submit_query().await {
        Ok(_) => {}
        Err(SubmitRejected::EmptyQuery) => {
            bail!("Query is empty. Omit it to start the interactive session.")
        }
        Err(rejected) => bail!(rejected),
    }

    print!("{}", ConsoleFormatter::format(controller.session(), format));
    if format == OutputFormat::Json {
        println!();
    }

    if controller.status().is_failure() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

async fn check_health(
    gateway: Arc<dyn StaffingGateway>,
    config: &SessionConfig,
    backend_url: &str,
) -> Result<ExitCode> {
    let status = CheckHealthUseCase::new(gateway, config.timeout)
        .execute()
        .await
        .with_context(|| format!("Backend at {} is unavailable", backend_url))?;

    if status.is_ok() {
        println!("{}: ok", backend_url);
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{}: {:?}", backend_url, status.status);
        Ok(ExitCode::FAILURE)
    }
}

async fn search_employees(
    gateway: Arc<dyn StaffingGateway>,
    config: &SessionConfig,
    cli: &Cli,
    format: OutputFormat,
) -> Result<ExitCode> {
    let found = SearchEmployeesUseCase::new(gateway, config.timeout)
        .execute(&cli.employee_filter())
        .await
        .context("Employee search failed")?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&found)?),
        _ if found.is_empty() => println!("No employees matched."),
        _ => print!("{}", ConsoleFormatter::format_candidates(&found)),
    }

    Ok(ExitCode::SUCCESS)
}
