/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the fixed chart sizes, file names and default
/// paths used across the application, making them easier to maintain.
/// Top-N cut-offs for ranked aggregates
pub mod limits {
    /// Exercises shown in the "top exercises by volume" chart
    pub const TOP_EXERCISES_BY_VOLUME: usize = 10;
    /// Exercises followed over time in the progression chart
    pub const PROGRESSION_EXERCISES: usize = 5;
    /// Exercises shown in the exercise frequency chart
    pub const FREQUENT_EXERCISES: usize = 15;
    /// Exercises shown in each ranked dashboard panel
    pub const DASHBOARD_RANKING: usize = 10;
}

/// Histogram binning
pub mod histogram {
    /// Default number of equal-width bins
    pub const DEFAULT_BINS: usize = 20;
    /// Largest bin count accepted from configuration
    pub const MAX_BINS: usize = 500;
}

/// Input and output locations
pub mod paths {
    /// Sets table used when no path is given on the command line
    pub const DEFAULT_SETS_PATH: &str = "output/sets_clean.csv";
    /// Directory created next to the input file for generated charts
    pub const OUTPUT_DIR_NAME: &str = "visualizations";
    /// File name prefix of a sets table
    pub const SETS_PREFIX: &str = "sets";
    /// File name prefix of the matching sessions table
    pub const SESSIONS_PREFIX: &str = "workouts";
    /// Config file looked up in the working directory and its parents
    pub const CONFIG_FILE_NAME: &str = ".workout-viz.toml";
    /// How many parent directories are searched for a config file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
}

/// Output file names, one per chart
pub mod files {
    pub const TOP_EXERCISES: &str = "top_exercises_by_volume.html";
    pub const WORKOUT_FREQUENCY: &str = "workout_frequency.html";
    pub const EXERCISE_PROGRESSION: &str = "exercise_progression.html";
    pub const SETS_DISTRIBUTION: &str = "sets_distribution.html";
    pub const EXERCISE_FREQUENCY: &str = "exercise_frequency.html";
    pub const SUMMARY_DASHBOARD: &str = "summary_dashboard.html";

    /// Every chart file in generation order
    pub const ALL: [&str; 6] = [
        TOP_EXERCISES,
        WORKOUT_FREQUENCY,
        EXERCISE_PROGRESSION,
        SETS_DISTRIBUTION,
        EXERCISE_FREQUENCY,
        SUMMARY_DASHBOARD,
    ];
}

/// Column names expected in the input tables
pub mod columns {
    pub const SESSION_ID: &str = "session_id";
    pub const EXERCISE_NAME: &str = "exercise_name";
    pub const REPS: &str = "reps";
    pub const WEIGHT: &str = "weight";
    pub const SESSION_DATE: &str = "session_date";
}

/// Chart styling
pub mod colors {
    pub const INDIAN_RED: &str = "#cd5c5c";
    pub const LIGHT_SEA_GREEN: &str = "#20b2aa";
    pub const MEDIUM_PURPLE: &str = "#9370db";
    pub const CORAL: &str = "#ff7f50";
    pub const LIGHT_BLUE: &str = "#add8e6";
    pub const LIGHT_GREEN: &str = "#90ee90";
    pub const ORANGE: &str = "#ffa500";

    /// Palette cycled through for multi-series and pie charts
    pub const PALETTE: [&str; 10] = [
        "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
        "#ff97ff", "#fecb52",
    ];
}

/// Chart.js CDN URL for rendering charts
pub const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js";
