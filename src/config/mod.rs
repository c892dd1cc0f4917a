//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::{CHART_JS_CDN, histogram, paths};
use crate::core::error::{Result, WorkoutVizError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Sessions table to join onto the sets (overrides the naming convention)
    pub sessions_path: Option<String>,

    /// Directory receiving the generated HTML files
    pub output_dir: Option<String>,

    /// Number of equal-width histogram bins
    pub histogram_bins: Option<usize>,

    /// Script URL used by the generated pages to load Chart.js
    pub chart_js_cdn: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sessions_path: None, // Derived from the sets file name
            output_dir: None,    // `visualizations` next to the sets file
            histogram_bins: Some(histogram::DEFAULT_BINS),
            chart_js_cdn: Some(CHART_JS_CDN.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            WorkoutVizError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            WorkoutVizError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        if let Ok(config) = Self::load_from_file(paths::CONFIG_FILE_NAME) {
            return config;
        }

        for i in 1..=paths::CONFIG_SEARCH_DEPTH {
            let path = format!("{}{}", "../".repeat(i), paths::CONFIG_FILE_NAME);
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref sessions_path) = cli_config.sessions_path {
            self.sessions_path = Some(sessions_path.clone());
        }
        if let Some(ref output_dir) = cli_config.output_dir {
            self.output_dir = Some(output_dir.clone());
        }
        if let Some(bins) = cli_config.histogram_bins {
            self.histogram_bins = Some(bins);
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    pub fn histogram_bins(&self) -> usize {
        self.histogram_bins.unwrap_or(histogram::DEFAULT_BINS)
    }

    pub fn chart_js_cdn(&self) -> &str {
        self.chart_js_cdn.as_deref().unwrap_or(CHART_JS_CDN)
    }

    /// Output directory for a given sets file: the configured one, or
    /// `visualizations` next to the input
    pub fn output_dir_for(&self, sets_path: &Path) -> PathBuf {
        match self.output_dir {
            Some(ref dir) => PathBuf::from(dir),
            None => sets_path
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(paths::OUTPUT_DIR_NAME),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(bins) = self.histogram_bins {
            if bins == 0 {
                return Err(WorkoutVizError::Config(
                    "Histogram bins cannot be 0. Expected a positive integer.".to_string(),
                ));
            }
            if bins > histogram::MAX_BINS {
                return Err(WorkoutVizError::Config(format!(
                    "Histogram bins of {bins} is too many. Expected at most {}.",
                    histogram::MAX_BINS
                )));
            }
        }

        if let Some(ref dir) = self.output_dir
            && dir.trim().is_empty()
        {
            return Err(WorkoutVizError::Config(
                "Output directory cannot be empty.".to_string(),
            ));
        }

        if let Some(ref cdn) = self.chart_js_cdn
            && cdn.trim().is_empty()
        {
            return Err(WorkoutVizError::Config(
                "Chart.js CDN URL cannot be empty.".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Inputs & outputs
    pub sessions_path: Option<String>, // --sessions
    pub output_dir: Option<String>,    // --output-dir

    // Charts
    pub histogram_bins: Option<usize>, // --bins

    // Output & verbosity
    pub quiet: bool,   // --quiet
    pub verbose: bool, // --verbose

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
