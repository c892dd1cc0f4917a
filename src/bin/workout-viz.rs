use clap::Parser;
use workout_viz::config::{CliConfig, Config};
use workout_viz::ingest::{InputPaths, load_dataset};
use workout_viz::reporting::logging;
use workout_viz::reporting::{
    ChartId, ChartOutcome, RenderOptions, generate_chart, prepare_output_dir,
};
use workout_viz::ui::output;
use workout_viz::ui::{Cli, cli_to_config, validate_cli_args};

use std::path::{Path, PathBuf};
use std::time::Instant;

const USAGE_HINT: &str = "Usage: workout-viz [path/to/sets.csv]";

fn main() {
    let cli = Cli::parse();

    match run_workout_viz(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("\n{USAGE_HINT}");
            eprintln!("For more information, try '--help'.");
            std::process::exit(1);
        }
    }
}

/// Main generation logic extracted from main() for testing
pub fn run_workout_viz(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    validate_cli_args(cli)?;

    // Parse CLI arguments into CliConfig using the derive-based CLI
    let cli_config = cli_to_config(cli);

    // Load and merge configuration
    let config = load_and_merge_config(&cli_config)?;

    // Setup logging and output settings
    let output_settings = setup_output_settings(&cli_config, &config);
    logging::init_logger(output_settings.verbose, output_settings.quiet);

    let sets_path = PathBuf::from(cli.sets_csv.trim());
    if !sets_path.is_file() {
        logging::log_error(
            &format!("Sets file not found: {}", sets_path.display()),
            None,
        );
        eprintln!("Error: Sets file not found: {}", sets_path.display());
        eprintln!("\n{USAGE_HINT}");
        return Ok(1);
    }

    let inputs = resolve_inputs(&sets_path, &config);
    let output_dir = config.output_dir_for(&sets_path);
    logging::log_config_info(&config, &output_dir);

    // Load input tables
    if output_settings.show_progress() {
        println!("Loading data from {}...", sets_path.display());
    }
    let (dataset, report) = load_dataset(&inputs)?;
    logging::log_dataset_loaded(&report);
    if output_settings.show_progress() {
        for line in output::load_lines(&report) {
            println!("{line}");
        }
    }

    // Generate every chart
    prepare_output_dir(&output_dir)?;
    if output_settings.show_progress() {
        println!();
        output::display_run_header(&sets_path, &output_dir);
    }

    let options = RenderOptions::new(config.histogram_bins(), config.chart_js_cdn());
    let start = Instant::now();
    let outcomes = generate_with_progress(&dataset, &output_dir, &options, &output_settings);
    logging::log_generation_complete(&outcomes, start.elapsed().as_millis());

    if output_settings.show_progress() {
        output::display_summary(&output_dir, &outcomes)?;
    }

    Ok(determine_exit_code(&outcomes))
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(
    cli_config: &CliConfig,
) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Settings for output formatting and display
pub struct OutputSettings {
    pub quiet: bool,
    pub verbose: bool,
}

impl OutputSettings {
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Setup output settings based on CLI and config
pub fn setup_output_settings(cli_config: &CliConfig, config: &Config) -> OutputSettings {
    OutputSettings {
        quiet: cli_config.quiet,
        verbose: config.verbose.unwrap_or(false),
    }
}

/// Pair the sets file with an explicit sessions path, or derive one from its name
pub fn resolve_inputs(sets_path: &Path, config: &Config) -> InputPaths {
    let explicit = config.sessions_path.as_ref().map(PathBuf::from);
    InputPaths::resolve(sets_path, explicit)
}

/// Run each chart in order, printing a progress line per stage
pub fn generate_with_progress(
    dataset: &workout_viz::Dataset,
    output_dir: &Path,
    options: &RenderOptions,
    output_settings: &OutputSettings,
) -> Vec<ChartOutcome> {
    ChartId::ALL
        .iter()
        .map(|chart| {
            if output_settings.show_progress() {
                println!("{}", output::stage_line(*chart));
            }
            let outcome = generate_chart(*chart, dataset, output_dir, options);
            logging::log_chart_outcome(&outcome);
            if output_settings.show_progress() {
                println!("{}", output::outcome_line(&outcome));
            }
            outcome
        })
        .collect()
}

/// 0 unless a chart failed to be written; skipped charts are not failures
pub fn determine_exit_code(outcomes: &[ChartOutcome]) -> i32 {
    if outcomes.iter().any(ChartOutcome::is_failed) {
        1
    } else {
        0
    }
}
