use crate::config::Config;
use crate::ingest::{LoadReport, SessionsStatus};
use crate::reporting::generate::{ChartOutcome, ChartStatus};
use log::{debug, error, info, warn};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    let installed = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    // A logger can only be installed once per process
    if installed.is_err() {
        return;
    }

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config, output_dir: &Path) {
    let bins = config.histogram_bins();
    let cdn = config.chart_js_cdn();
    let sessions = config.sessions_path.as_deref().unwrap_or("<derived>");

    info!("Configuration: bins={bins}, sessions={sessions}");
    info!("Output: dir={}, chart_js={cdn}", output_dir.display());
}

/// Log what was loaded from the input tables
pub fn log_dataset_loaded(report: &LoadReport) {
    info!(
        "Loaded {} sets from {}",
        report.sets_loaded,
        report.sets_path.display()
    );
    if report.repaired_values > 0 {
        debug!("Replaced {} malformed numeric values with 0", report.repaired_values);
    }
    match &report.sessions {
        SessionsStatus::Joined { path, sessions } => {
            info!("Joined {sessions} sessions from {}", path.display());
            if report.undated_sessions > 0 {
                debug!("{} sessions have no usable date", report.undated_sessions);
            }
            if report.unmatched_sets > 0 {
                debug!("{} sets have no matching session", report.unmatched_sets);
            }
        }
        SessionsStatus::NotConfigured => info!("No sessions file configured"),
        SessionsStatus::Missing(path) => {
            warn!("Sessions file missing: {}", path.display())
        }
        SessionsStatus::Unreadable { path, reason } => {
            warn!("Sessions file unreadable: {} ({reason})", path.display())
        }
    }
}

/// Log the outcome of one chart
pub fn log_chart_outcome(outcome: &ChartOutcome) {
    match &outcome.status {
        ChartStatus::Written(path) => debug!("✓ {} -> {}", outcome.chart, path.display()),
        ChartStatus::Skipped(reason) => info!("Skipped {}: {reason}", outcome.chart),
        ChartStatus::Failed(message) => error!("✗ {}: {message}", outcome.chart),
    }
}

/// Log generation completion
pub fn log_generation_complete(outcomes: &[ChartOutcome], duration_ms: u128) {
    let written = outcomes.iter().filter(|o| o.is_written()).count();
    let failed = outcomes.iter().filter(|o| o.is_failed()).count();

    if failed == 0 {
        info!(
            "✅ Generation complete: {}/{} charts written ({}ms)",
            written,
            outcomes.len(),
            duration_ms
        );
    } else {
        warn!(
            "❌ Generation complete: {}/{} charts written, {} failed ({}ms)",
            written,
            outcomes.len(),
            failed,
            duration_ms
        );
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
