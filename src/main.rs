use shabbat_match::config::{LoggingSettings, Settings};
use shabbat_match::core::{GreedyMatcher, InvariantViolation};
use shabbat_match::models::AssignmentRun;
use shabbat_match::services::{
    load_snapshot, run_snapshot, to_match_records, MatchRecord, SnapshotError,
};
use serde::Serialize;
use std::process::ExitCode;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Anything that stops a batch run
#[derive(Debug, Error)]
enum RunError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("No snapshot given: pass a path or set input.snapshot_path")]
    MissingSnapshot,

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error("Matching aborted: {0}")]
    Matching(#[from] InvariantViolation),

    #[error("Failed to write output: {0}")]
    Output(#[from] serde_json::Error),
}

/// What the runner prints for the write path to pick up
#[derive(Debug, Serialize)]
struct RunOutput {
    run: AssignmentRun,
    records: Vec<MatchRecord>,
}

fn init_tracing(logging: &LoggingSettings) {
    let logging = logging.clone().overridden(
        std::env::var("LOG_LEVEL").ok(),
        std::env::var("LOG_FORMAT").ok(),
    );

    let filter = EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so stdout stays machine-readable
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if logging.is_pretty() {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

fn run(settings: Settings) -> Result<(), RunError> {
    let snapshot_path = std::env::args()
        .nth(1)
        .or_else(|| settings.input.snapshot_path.clone())
        .ok_or(RunError::MissingSnapshot)?;

    let snapshot = load_snapshot(&snapshot_path)?;
    info!(
        "Loaded snapshot {} ({} guests, {} hosts, {} commitments)",
        snapshot_path,
        snapshot.guests.len(),
        snapshot.hosts.len(),
        snapshot.commitments.len()
    );

    let policy = settings.matching.policy();
    info!("Matching with policy: {:?}", policy);

    let run = run_snapshot(&GreedyMatcher::new(), snapshot, &policy)?;
    let records = to_match_records(&run);

    let output = RunOutput { run, records };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Logging comes from settings, so load them first and report any failure once tracing is up
    let settings = Settings::load();
    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    init_tracing(&logging);

    info!("Starting Shabbat match batch run...");

    let result = settings.map_err(RunError::from).and_then(|settings| {
        info!("Configuration loaded successfully");
        run(settings)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
