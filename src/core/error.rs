use std::fmt;

/// Error types for workout-viz operations
#[derive(Debug)]
pub enum WorkoutVizError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// CSV reading error
    Csv(csv::Error),

    /// Configuration error
    Config(String),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// File not found error
    FileNotFound(String),

    /// A required column is absent from an input table
    MissingColumn(String),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for WorkoutVizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkoutVizError::Io(err) => write!(f, "IO error: {err}"),
            WorkoutVizError::Csv(err) => write!(f, "CSV error: {err}"),
            WorkoutVizError::Config(msg) => write!(f, "Configuration error: {msg}"),
            WorkoutVizError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            WorkoutVizError::FileNotFound(path) => write!(f, "File not found: {path}"),
            WorkoutVizError::MissingColumn(column) => {
                write!(f, "Missing column: '{column}' is required")
            }
            WorkoutVizError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for WorkoutVizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WorkoutVizError::Io(err) => Some(err),
            WorkoutVizError::Csv(err) => Some(err),
            WorkoutVizError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for WorkoutVizError {
    fn from(err: std::io::Error) -> Self {
        WorkoutVizError::Io(err)
    }
}

impl From<csv::Error> for WorkoutVizError {
    fn from(err: csv::Error) -> Self {
        WorkoutVizError::Csv(err)
    }
}

impl From<toml::de::Error> for WorkoutVizError {
    fn from(err: toml::de::Error) -> Self {
        WorkoutVizError::TomlParsing(err)
    }
}

/// Type alias for Results using WorkoutVizError
pub type Result<T> = std::result::Result<T, WorkoutVizError>;
