//! workout-viz turns a cleaned workout log (one CSV row per exercise set,
//! optionally paired with a sessions table carrying dates) into a set of
//! interactive Chart.js HTML reports.
//!
//! The pipeline is load → aggregate → render:
//!
//! - [`ingest`] reads and repairs the input tables and joins session dates
//! - [`analysis`] folds the sets into sorted, chart-ready summaries
//! - [`reporting`] renders each summary as a standalone HTML page

pub mod analysis;
pub mod config;
pub mod core;
pub mod ingest;
pub mod reporting;
pub mod ui;

// Re-export commonly used items
pub use crate::config::{CliConfig, Config};
pub use crate::core::{Dataset, Result, SessionRecord, SetRecord, WorkoutVizError};
pub use crate::ingest::{InputPaths, LoadReport, load_dataset};
pub use crate::reporting::{ChartId, ChartOutcome, ChartStatus, RenderOptions, generate_all};
