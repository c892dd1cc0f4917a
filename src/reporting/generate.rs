//! Runs every aggregator/renderer pair and records what happened to each

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::{self, Aggregate, SkipReason};
use crate::core::constants::{files, histogram, limits};
use crate::core::{Dataset, Result};
use crate::reporting::builders::{self, titles};
use crate::reporting::chart::ChartSpec;
use crate::reporting::dashboard::{HtmlRenderer, PageContext, RenderError};

/// The six generated reports, in generation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartId {
    TopExercises,
    WorkoutFrequency,
    ExerciseProgression,
    SetsDistribution,
    ExerciseFrequency,
    SummaryDashboard,
}

impl ChartId {
    pub const ALL: [ChartId; 6] = [
        ChartId::TopExercises,
        ChartId::WorkoutFrequency,
        ChartId::ExerciseProgression,
        ChartId::SetsDistribution,
        ChartId::ExerciseFrequency,
        ChartId::SummaryDashboard,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            ChartId::TopExercises => files::TOP_EXERCISES,
            ChartId::WorkoutFrequency => files::WORKOUT_FREQUENCY,
            ChartId::ExerciseProgression => files::EXERCISE_PROGRESSION,
            ChartId::SetsDistribution => files::SETS_DISTRIBUTION,
            ChartId::ExerciseFrequency => files::EXERCISE_FREQUENCY,
            ChartId::SummaryDashboard => files::SUMMARY_DASHBOARD,
        }
    }

    /// Short description used in progress lines
    pub fn description(&self) -> &'static str {
        match self {
            ChartId::TopExercises => "top exercises by volume",
            ChartId::WorkoutFrequency => "workout frequency",
            ChartId::ExerciseProgression => "exercise progression",
            ChartId::SetsDistribution => "sets distribution",
            ChartId::ExerciseFrequency => "exercise frequency",
            ChartId::SummaryDashboard => "summary dashboard",
        }
    }

    /// 1-based position in the generation order
    pub fn stage(&self) -> usize {
        Self::ALL
            .iter()
            .position(|id| id == self)
            .map_or(0, |index| index + 1)
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// What happened when one report was generated
#[derive(Debug, Clone, PartialEq)]
pub enum ChartStatus {
    Written(PathBuf),
    Skipped(SkipReason),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartOutcome {
    pub chart: ChartId,
    pub status: ChartStatus,
}

impl ChartOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self.status, ChartStatus::Written(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.status, ChartStatus::Skipped(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, ChartStatus::Failed(_))
    }
}

/// Settings for one generation run
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub histogram_bins: usize,
    pub page: PageContext,
}

impl RenderOptions {
    pub fn new(histogram_bins: usize, chart_js_cdn: impl Into<String>) -> Self {
        Self {
            histogram_bins,
            page: PageContext {
                chart_js_cdn: chart_js_cdn.into(),
                generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            },
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(histogram::DEFAULT_BINS, crate::core::constants::CHART_JS_CDN)
    }
}

/// Create the output directory if needed; an existing one is reused
pub fn prepare_output_dir(output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir)?;
    Ok(())
}

/// Generate every report in order. A failure in one never stops the others.
pub fn generate_all(
    dataset: &Dataset,
    output_dir: &Path,
    options: &RenderOptions,
) -> Result<Vec<ChartOutcome>> {
    prepare_output_dir(output_dir)?;

    Ok(ChartId::ALL
        .iter()
        .map(|chart| generate_chart(*chart, dataset, output_dir, options))
        .collect())
}

/// Aggregate and render a single report into `output_dir`
pub fn generate_chart(
    chart: ChartId,
    dataset: &Dataset,
    output_dir: &Path,
    options: &RenderOptions,
) -> ChartOutcome {
    let path = output_dir.join(chart.file_name());
    let bins = options.histogram_bins;

    let rendered = match chart {
        ChartId::TopExercises => Aggregate::Ready(builders::top_exercises_chart(
            &analysis::top_exercises_by_volume(&dataset.sets, limits::TOP_EXERCISES_BY_VOLUME),
        )),
        ChartId::WorkoutFrequency => {
            let sessions = dataset.sessions.as_deref();
            map_ready(analysis::workout_frequency(sessions), |table| {
                builders::workout_frequency_chart(&table)
            })
        }
        ChartId::ExerciseProgression => map_ready(
            analysis::exercise_progression(dataset, limits::PROGRESSION_EXERCISES),
            |series| builders::progression_chart(&series),
        ),
        ChartId::SetsDistribution => Aggregate::Ready(builders::sets_distribution_chart(
            &analysis::sets_per_workout(&dataset.sets),
            bins,
        )),
        ChartId::ExerciseFrequency => Aggregate::Ready(builders::exercise_frequency_chart(
            &analysis::exercise_frequency(&dataset.sets, limits::FREQUENT_EXERCISES),
        )),
        ChartId::SummaryDashboard => {
            return outcome(chart, path.clone(), write_dashboard(dataset, &path, options));
        }
    };

    match rendered {
        Aggregate::Ready(spec) => {
            let result = HtmlRenderer::write_chart(&spec, &path, &options.page);
            outcome(chart, path, result)
        }
        Aggregate::Skipped(reason) => ChartOutcome {
            chart,
            status: ChartStatus::Skipped(reason),
        },
    }
}

fn write_dashboard(
    dataset: &Dataset,
    path: &Path,
    options: &RenderOptions,
) -> std::result::Result<(), RenderError> {
    let bundle = analysis::summary_statistics(dataset);
    let panels = builders::dashboard_panels(&bundle, options.histogram_bins);

    HtmlRenderer::write_dashboard(
        titles::SUMMARY_DASHBOARD,
        &bundle.headline,
        &panels,
        path,
        &options.page,
    )
}

fn map_ready<T, F>(aggregate: Aggregate<T>, build: F) -> Aggregate<ChartSpec>
where
    F: FnOnce(T) -> ChartSpec,
{
    match aggregate {
        Aggregate::Ready(value) => Aggregate::Ready(build(value)),
        Aggregate::Skipped(reason) => Aggregate::Skipped(reason),
    }
}

fn outcome(
    chart: ChartId,
    path: PathBuf,
    result: std::result::Result<(), RenderError>,
) -> ChartOutcome {
    let status = match result {
        Ok(()) => ChartStatus::Written(path),
        Err(e) => ChartStatus::Failed(e.to_string()),
    };
    ChartOutcome { chart, status }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SessionRecord, SetRecord};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, d).unwrap()
    }

    fn sample_sets() -> Vec<SetRecord> {
        vec![
            SetRecord::new("1", "Bench", 10, 100.0),
            SetRecord::new("1", "Bench", 8, 100.0),
            SetRecord::new("2", "Squat", 5, 150.0),
        ]
    }

    fn dated_dataset() -> Dataset {
        let sets = vec![
            SetRecord::new("1", "Bench", 10, 100.0).with_date(day(13)),
            SetRecord::new("1", "Bench", 8, 100.0).with_date(day(13)),
            SetRecord::new("2", "Squat", 5, 150.0).with_date(day(15)),
        ];
        let sessions = vec![
            SessionRecord::new("1", Some(day(13))),
            SessionRecord::new("2", Some(day(15))),
        ];
        Dataset::new(sets, Some(sessions))
    }

    fn options() -> RenderOptions {
        RenderOptions::new(20, "https://cdn.jsdelivr.net/npm/chart.js")
    }

    #[test]
    fn test_chart_id_metadata() {
        assert_eq!(ChartId::ALL.len(), files::ALL.len());
        for (chart, file) in ChartId::ALL.iter().zip(files::ALL) {
            assert_eq!(chart.file_name(), file);
        }
        assert_eq!(ChartId::TopExercises.stage(), 1);
        assert_eq!(ChartId::SummaryDashboard.stage(), 6);
        assert_eq!(ChartId::SetsDistribution.to_string(), "sets distribution");
    }

    #[test]
    fn test_generate_all_with_sessions_writes_everything() {
        let dir = TempDir::new().unwrap();
        let outcomes = generate_all(&dated_dataset(), dir.path(), &options()).unwrap();

        assert_eq!(outcomes.len(), 6);
        assert!(outcomes.iter().all(ChartOutcome::is_written));
        for file in files::ALL {
            assert!(dir.path().join(file).is_file(), "{file} missing");
        }
    }

    #[test]
    fn test_generate_all_without_sessions_skips_dated_charts() {
        let dir = TempDir::new().unwrap();
        let dataset = Dataset::new(sample_sets(), None);
        let outcomes = generate_all(&dataset, dir.path(), &options()).unwrap();

        let skipped: Vec<ChartId> = outcomes
            .iter()
            .filter(|o| o.is_skipped())
            .map(|o| o.chart)
            .collect();
        assert_eq!(
            skipped,
            vec![ChartId::WorkoutFrequency, ChartId::ExerciseProgression]
        );
        assert!(!dir.path().join(files::WORKOUT_FREQUENCY).exists());
        assert!(!dir.path().join(files::EXERCISE_PROGRESSION).exists());

        let dashboard =
            std::fs::read_to_string(dir.path().join(files::SUMMARY_DASHBOARD)).unwrap();
        assert!(dashboard.contains("No date information available"));
    }

    #[test]
    fn test_generate_all_creates_nested_output_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("visualizations");
        let outcomes =
            generate_all(&Dataset::new(sample_sets(), None), &nested, &options()).unwrap();

        assert!(nested.is_dir());
        assert_eq!(outcomes.iter().filter(|o| o.is_written()).count(), 4);
    }

    #[test]
    fn test_empty_dataset_writes_placeholder_pages() {
        let dir = TempDir::new().unwrap();
        let outcomes =
            generate_all(&Dataset::new(Vec::new(), None), dir.path(), &options()).unwrap();

        assert!(!outcomes.iter().any(ChartOutcome::is_failed));
        let top = std::fs::read_to_string(dir.path().join(files::TOP_EXERCISES)).unwrap();
        assert!(top.contains("No data available"));
    }

    #[test]
    fn test_failure_does_not_stop_other_charts() {
        let dir = TempDir::new().unwrap();
        // A directory squatting on a chart's file name makes that write fail
        std::fs::create_dir(dir.path().join(files::TOP_EXERCISES)).unwrap();

        let outcomes = generate_all(&dated_dataset(), dir.path(), &options()).unwrap();

        assert!(outcomes[0].is_failed());
        assert!(outcomes[1..].iter().all(ChartOutcome::is_written));
    }

    #[test]
    fn test_generate_all_rejects_file_as_output_dir() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("not_a_dir");
        std::fs::write(&file, "x").unwrap();

        assert!(generate_all(&dated_dataset(), &file, &options()).is_err());
    }
}
