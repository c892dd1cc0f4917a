//! Aggregation of loaded workout data
//!
//! This module turns the joined set records into the small, sorted
//! summaries that each chart displays.

pub mod aggregate;
pub mod summary;

// Re-export commonly used items
pub use aggregate::{
    exercise_frequency, exercise_progression, sets_per_workout, summary_statistics,
    top_exercises_by_volume, workout_frequency,
};
pub use summary::{
    Aggregate, Distribution, HeadlineStats, Series, SkipReason, SummaryBundle, SummaryTable, Tally,
};
