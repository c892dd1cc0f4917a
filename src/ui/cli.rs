// Command-line interface definitions and parsing for workout-viz

use crate::config::CliConfig;
use crate::core::constants::{histogram, paths};
use crate::core::error::{Result, WorkoutVizError};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Cleaned sets table (CSV)
    #[arg(value_name = "SETS_CSV", default_value = paths::DEFAULT_SETS_PATH)]
    pub sets_csv: String,

    // Inputs & Outputs
    /// Sessions table with dates (default: derived from the sets file name)
    #[arg(long, value_name = "FILE", help_heading = "Inputs & Outputs")]
    pub sessions: Option<String>,

    /// Directory for the generated HTML files (default: visualizations next to the input)
    #[arg(
        short = 'o',
        long,
        value_name = "DIR",
        help_heading = "Inputs & Outputs"
    )]
    pub output_dir: Option<String>,

    // Charts
    /// Histogram bin count (default: 20)
    #[arg(long, value_name = "COUNT", help_heading = "Charts")]
    pub bins: Option<usize>,

    // Output & Verbosity
    /// Suppress progress output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert parsed CLI arguments into the CliConfig merged over file config
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        // Inputs & outputs
        sessions_path: non_empty(cli.sessions.as_deref()),
        output_dir: non_empty(cli.output_dir.as_deref()),

        // Charts
        histogram_bins: cli.bins,

        // Output & verbosity
        quiet: cli.quiet,
        verbose: cli.verbose,

        // Configuration
        config_file: non_empty(cli.config.as_deref()),
        no_config: cli.no_config,
    }
}

/// Validate CLI arguments that clap cannot check on its own
pub fn validate_cli_args(cli: &Cli) -> Result<()> {
    if cli.sets_csv.trim().is_empty() {
        return Err(WorkoutVizError::InvalidArgument(
            "Sets file path cannot be empty".to_string(),
        ));
    }

    if let Some(bins) = cli.bins
        && (bins == 0 || bins > histogram::MAX_BINS)
    {
        return Err(WorkoutVizError::InvalidArgument(format!(
            "Bin count {bins} is invalid. Expected a value between 1-{}.",
            histogram::MAX_BINS
        )));
    }

    Ok(())
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
