//! Chart rendering and reporting
//!
//! This module turns summaries into Chart.js pages, writes the six
//! report files and provides structured logging for the application.

pub mod builders;
pub mod chart;
pub mod dashboard;
pub mod generate;
pub mod logging;

// Re-export commonly used items
pub use chart::{Bin, ChartKind, ChartSeries, ChartSpec, histogram};
pub use dashboard::{HtmlRenderer, PageContext, Panel, RenderError};
pub use generate::{
    ChartId, ChartOutcome, ChartStatus, RenderOptions, generate_all, generate_chart,
    prepare_output_dir,
};
