//! Chart-ready summary structures produced by the aggregators

use chrono::NaiveDate;
use std::fmt;

/// One `(category, value)` pair of a summary table
#[derive(Debug, Clone, PartialEq)]
pub struct Tally {
    pub label: String,
    pub value: f64,
}

impl Tally {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Ordered `(category, value)` pairs, already sorted and truncated
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryTable {
    pub entries: Vec<Tally>,
}

impl SummaryTable {
    pub fn new(entries: Vec<Tally>) -> Self {
        Self { entries }
    }

    /// Sort descending by value and keep the first `limit` entries.
    ///
    /// The sort is stable, so equal values keep their incoming order.
    pub fn ranked(mut entries: Vec<Tally>, limit: usize) -> Self {
        entries.sort_by(|a, b| b.value.total_cmp(&a.value));
        entries.truncate(limit);
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|t| t.label.clone()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|t| t.value).collect()
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|t| t.value).sum()
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|t| t.label == label)
            .map(|t| t.value)
    }
}

/// A named time series ordered by date
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<(NaiveDate, f64)>,
}

impl Series {
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.points.iter().map(|(date, _)| *date)
    }

    pub fn value_on(&self, date: NaiveDate) -> Option<f64> {
        self.points
            .iter()
            .find(|(d, _)| *d == date)
            .map(|(_, value)| *value)
    }
}

/// Raw values to be binned by a histogram
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distribution {
    pub values: Vec<f64>,
}

impl Distribution {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Why an aggregate could not be computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No sessions table was loaded, so sets carry no dates
    NoSessionData,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoSessionData => write!(f, "No date information available"),
        }
    }
}

/// Result of an aggregate that depends on optional inputs
#[derive(Debug, Clone, PartialEq)]
pub enum Aggregate<T> {
    Ready(T),
    Skipped(SkipReason),
}

impl<T> Aggregate<T> {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Aggregate::Skipped(_))
    }

    pub fn ready(self) -> Option<T> {
        match self {
            Aggregate::Ready(value) => Some(value),
            Aggregate::Skipped(_) => None,
        }
    }

    pub fn as_ref(&self) -> Aggregate<&T> {
        match self {
            Aggregate::Ready(value) => Aggregate::Ready(value),
            Aggregate::Skipped(reason) => Aggregate::Skipped(*reason),
        }
    }
}

/// Dataset-wide counters shown above the dashboard panels
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadlineStats {
    pub total_workouts: usize,
    pub total_sets: usize,
    pub unique_exercises: usize,
    pub total_volume: f64,
    pub avg_sets_per_workout: f64,
}

/// The four dashboard panels plus headline counters
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryBundle {
    /// Share of total volume among the top exercises
    pub volume_share: SummaryTable,
    /// Exercises with the highest mean reps
    pub average_reps: SummaryTable,
    /// Every nonzero weight
    pub weight_distribution: Distribution,
    /// Sets logged per day
    pub daily_sets: Aggregate<Series>,
    pub headline: HeadlineStats,
}
