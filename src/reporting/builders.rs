//! Chart builders, one per aggregate
//!
//! Each builder maps a summary onto a [`ChartSpec`] with the fixed title
//! and axis labels of its report.

use std::collections::BTreeSet;

use crate::analysis::{Aggregate, Distribution, Series, SummaryBundle, SummaryTable};
use crate::core::constants::colors;
use crate::reporting::chart::{ChartKind, ChartSeries, ChartSpec, histogram, palette};
use crate::reporting::dashboard::Panel;

pub mod titles {
    pub const TOP_EXERCISES: &str = "Top 10 Exercises by Total Volume (reps × weight)";
    pub const WORKOUT_FREQUENCY: &str = "Workouts Per Week";
    pub const EXERCISE_PROGRESSION: &str =
        "Exercise Volume Progression Over Time (Top 5 Exercises)";
    pub const SETS_DISTRIBUTION: &str = "Distribution of Sets Per Workout";
    pub const EXERCISE_FREQUENCY: &str = "Top 15 Most Frequent Exercises (by # of workouts)";
    pub const SUMMARY_DASHBOARD: &str = "Workout Summary Dashboard";

    pub const VOLUME_SHARE: &str = "Total Volume by Exercise Type";
    pub const AVERAGE_REPS: &str = "Average Reps by Exercise";
    pub const WEIGHT_DISTRIBUTION: &str = "Weight Distribution";
    pub const SETS_OVER_TIME: &str = "Sets Over Time";
}

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn top_exercises_chart(table: &SummaryTable) -> ChartSpec {
    table_chart(
        ChartKind::Bar,
        titles::TOP_EXERCISES,
        "Exercise",
        "Total Volume",
        table,
        "Total Volume",
        colors::INDIAN_RED,
    )
}

pub fn workout_frequency_chart(table: &SummaryTable) -> ChartSpec {
    table_chart(
        ChartKind::Bar,
        titles::WORKOUT_FREQUENCY,
        "Week",
        "Number of Workouts",
        table,
        "Workouts",
        colors::LIGHT_SEA_GREEN,
    )
}

/// One line per exercise over the union of all dates. Days on which an
/// exercise was not trained are gaps.
pub fn progression_chart(series: &[Series]) -> ChartSpec {
    let dates: BTreeSet<_> = series.iter().flat_map(|s| s.dates()).collect();
    let labels = dates
        .iter()
        .map(|date| date.format(DATE_FORMAT).to_string())
        .collect();

    series.iter().zip(palette(series.len())).fold(
        ChartSpec::new(
            ChartKind::Line,
            titles::EXERCISE_PROGRESSION,
            "Date",
            "Volume (reps × weight)",
        )
        .with_labels(labels),
        |spec, (line, color)| {
            let data = dates.iter().map(|date| line.value_on(*date)).collect();
            spec.with_series(ChartSeries::with_gaps(line.name.clone(), data, color))
        },
    )
}

pub fn sets_distribution_chart(distribution: &Distribution, bins: usize) -> ChartSpec {
    histogram_chart(
        titles::SETS_DISTRIBUTION,
        "Number of Sets",
        "Number of Workouts",
        distribution,
        bins,
        colors::MEDIUM_PURPLE,
    )
}

pub fn exercise_frequency_chart(table: &SummaryTable) -> ChartSpec {
    table_chart(
        ChartKind::Bar,
        titles::EXERCISE_FREQUENCY,
        "Exercise",
        "Number of Workouts",
        table,
        "Workouts",
        colors::CORAL,
    )
}

/// The four dashboard panels in grid order
pub fn dashboard_panels(bundle: &SummaryBundle, bins: usize) -> [Panel; 4] {
    let volume_share = table_chart(
        ChartKind::Pie,
        titles::VOLUME_SHARE,
        "Exercise",
        "Total Volume",
        &bundle.volume_share,
        "Total Volume",
        colors::INDIAN_RED,
    );
    let average_reps = table_chart(
        ChartKind::Bar,
        titles::AVERAGE_REPS,
        "Exercise",
        "Average Reps",
        &bundle.average_reps,
        "Average Reps",
        colors::LIGHT_BLUE,
    );
    let weights = histogram_chart(
        titles::WEIGHT_DISTRIBUTION,
        "Weight",
        "Count",
        &bundle.weight_distribution,
        bins,
        colors::LIGHT_GREEN,
    );
    let sets_over_time = match bundle.daily_sets.as_ref() {
        Aggregate::Ready(series) => Panel::Chart(daily_sets_chart(series)),
        Aggregate::Skipped(reason) => Panel::Placeholder {
            title: titles::SETS_OVER_TIME.to_string(),
            message: reason.to_string(),
        },
    };

    [
        Panel::Chart(volume_share),
        Panel::Chart(average_reps),
        Panel::Chart(weights),
        sets_over_time,
    ]
}

fn daily_sets_chart(series: &Series) -> ChartSpec {
    let labels = series
        .dates()
        .map(|date| date.format(DATE_FORMAT).to_string())
        .collect();
    let values = series.points.iter().map(|(_, value)| *value).collect();

    ChartSpec::new(
        ChartKind::Scatter,
        titles::SETS_OVER_TIME,
        "Date",
        "Number of Sets",
    )
    .with_labels(labels)
    .with_series(ChartSeries::new(series.name.clone(), values, colors::ORANGE))
}

fn table_chart(
    kind: ChartKind,
    title: &str,
    x_label: &str,
    y_label: &str,
    table: &SummaryTable,
    series_label: &str,
    color: &str,
) -> ChartSpec {
    ChartSpec::new(kind, title, x_label, y_label)
        .with_labels(table.labels())
        .with_series(ChartSeries::new(series_label, table.values(), color))
}

fn histogram_chart(
    title: &str,
    x_label: &str,
    y_label: &str,
    distribution: &Distribution,
    bins: usize,
    color: &str,
) -> ChartSpec {
    let buckets = histogram(&distribution.values, bins);
    let labels = buckets.iter().map(|bin| bin.label()).collect();
    let counts = buckets.iter().map(|bin| bin.count as f64).collect();

    ChartSpec::new(ChartKind::Histogram, title, x_label, y_label)
        .with_labels(labels)
        .with_series(ChartSeries::new("Count", counts, color))
}
