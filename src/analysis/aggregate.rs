//! The six aggregates behind the generated charts.
//!
//! Every function here is pure: it borrows the loaded records and returns
//! a freshly built summary. Groups are formed in first-encounter order and
//! ranked with a stable sort, so ties always resolve to the row that was
//! seen first. Empty input yields an empty summary.

use chrono::{Datelike, NaiveDate};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeMap;

use crate::analysis::summary::{
    Aggregate, Distribution, HeadlineStats, Series, SkipReason, SummaryBundle, SummaryTable,
    Tally,
};
use crate::core::constants::limits;
use crate::core::types::{Dataset, SessionRecord, SetRecord};

/// Total volume per exercise, highest first, limited to `limit` exercises
pub fn top_exercises_by_volume(sets: &[SetRecord], limit: usize) -> SummaryTable {
    let totals = group_by_exercise(sets, |total: &mut f64, set| *total += set.volume());
    SummaryTable::ranked(into_tallies(totals), limit)
}

/// Sessions per ISO week in chronological order, labelled `YYYY-Www`
pub fn workout_frequency(sessions: Option<&[SessionRecord]>) -> Aggregate<SummaryTable> {
    let Some(sessions) = sessions else {
        return Aggregate::Skipped(SkipReason::NoSessionData);
    };

    let weeks = sessions
        .iter()
        .filter_map(|session| session.session_date)
        .fold(BTreeMap::new(), |mut weeks, date| {
            let week = date.iso_week();
            *weeks.entry((week.year(), week.week())).or_insert(0usize) += 1;
            weeks
        });

    Aggregate::Ready(SummaryTable::new(
        weeks
            .into_iter()
            .map(|((year, week), count)| Tally::new(format!("{year}-W{week:02}"), count as f64))
            .collect(),
    ))
}

/// Daily volume of the `limit` heaviest exercises, one series per exercise
pub fn exercise_progression(dataset: &Dataset, limit: usize) -> Aggregate<Vec<Series>> {
    if !dataset.has_session_data() {
        return Aggregate::Skipped(SkipReason::NoSessionData);
    }

    let leaders = top_exercises_by_volume(&dataset.sets, limit);
    let series = leaders
        .entries
        .iter()
        .map(|leader| {
            let daily = dataset
                .sets
                .iter()
                .filter(|set| set.exercise_name == leader.label)
                .filter_map(|set| set.session_date.map(|date| (date, set.volume())))
                .fold(BTreeMap::new(), |mut daily, (date, volume)| {
                    *daily.entry(date).or_insert(0.0) += volume;
                    daily
                });

            Series {
                name: leader.label.clone(),
                points: daily.into_iter().collect(),
            }
        })
        .collect();

    Aggregate::Ready(series)
}

/// Number of sets logged in each session, in first-encounter order
pub fn sets_per_workout(sets: &[SetRecord]) -> Distribution {
    let counts = group_by(
        sets,
        |set| set.session_id.as_str(),
        |count: &mut usize, _| *count += 1,
    );
    Distribution {
        values: counts.into_iter().map(|(_, count)| count as f64).collect(),
    }
}

/// Distinct sessions per exercise, most frequent first
pub fn exercise_frequency(sets: &[SetRecord], limit: usize) -> SummaryTable {
    let sessions = group_by_exercise::<FxHashSet<&str>, _>(sets, |seen, set| {
        if !set.session_id.is_empty() {
            seen.insert(set.session_id.as_str());
        }
    });
    SummaryTable::ranked(
        sessions
            .into_iter()
            .map(|(name, seen)| Tally::new(name, seen.len() as f64))
            .collect(),
        limit,
    )
}

/// Mean reps per exercise, highest first
pub fn average_reps(sets: &[SetRecord], limit: usize) -> SummaryTable {
    let sums = group_by_exercise(sets, |(total, count): &mut (f64, usize), set| {
        *total += f64::from(set.reps);
        *count += 1;
    });
    SummaryTable::ranked(
        sums.into_iter()
            .map(|(name, (total, count))| Tally::new(name, total / count as f64))
            .collect(),
        limit,
    )
}

/// Every nonzero weight, in row order
pub fn weight_distribution(sets: &[SetRecord]) -> Distribution {
    Distribution {
        values: sets
            .iter()
            .map(|set| set.weight)
            .filter(|weight| *weight > 0.0)
            .collect(),
    }
}

/// Sets logged per calendar day, chronological
pub fn daily_sets(dataset: &Dataset) -> Aggregate<Series> {
    if !dataset.has_session_data() {
        return Aggregate::Skipped(SkipReason::NoSessionData);
    }

    let days = dataset
        .sets
        .iter()
        .filter_map(|set| set.session_date)
        .fold(BTreeMap::<NaiveDate, f64>::new(), |mut days, date| {
            *days.entry(date).or_insert(0.0) += 1.0;
            days
        });

    Aggregate::Ready(Series {
        name: "Sets".to_string(),
        points: days.into_iter().collect(),
    })
}

/// Dataset-wide counters for the dashboard header
pub fn headline_stats(sets: &[SetRecord]) -> HeadlineStats {
    let workouts: FxHashSet<&str> = sets
        .iter()
        .map(|set| set.session_id.as_str())
        .filter(|id| !id.is_empty())
        .collect();
    let exercises: FxHashSet<&str> = sets
        .iter()
        .map(|set| set.exercise_name.as_str())
        .filter(|name| !name.is_empty())
        .collect();

    let total_workouts = workouts.len();
    let total_sets = sets.len();
    let avg_sets_per_workout = if total_workouts > 0 {
        total_sets as f64 / total_workouts as f64
    } else {
        0.0
    };

    HeadlineStats {
        total_workouts,
        total_sets,
        unique_exercises: exercises.len(),
        total_volume: sets.iter().map(SetRecord::volume).sum(),
        avg_sets_per_workout,
    }
}

/// All four dashboard panels and the headline counters
pub fn summary_statistics(dataset: &Dataset) -> SummaryBundle {
    SummaryBundle {
        volume_share: top_exercises_by_volume(&dataset.sets, limits::DASHBOARD_RANKING),
        average_reps: average_reps(&dataset.sets, limits::DASHBOARD_RANKING),
        weight_distribution: weight_distribution(&dataset.sets),
        daily_sets: daily_sets(dataset),
        headline: headline_stats(&dataset.sets),
    }
}

/// Fold sets into per-key accumulators, keeping keys in the order they first
/// appear. Rows with an empty key are left out.
fn group_by<'a, A, K, F>(sets: &'a [SetRecord], key: K, mut fold: F) -> Vec<(&'a str, A)>
where
    A: Default,
    K: Fn(&'a SetRecord) -> &'a str,
    F: FnMut(&mut A, &'a SetRecord),
{
    let mut index: FxHashMap<&'a str, usize> = FxHashMap::default();
    let mut groups: Vec<(&'a str, A)> = Vec::new();

    for set in sets {
        let name = key(set);
        if name.is_empty() {
            continue;
        }
        let slot = *index.entry(name).or_insert_with(|| {
            groups.push((name, A::default()));
            groups.len() - 1
        });
        fold(&mut groups[slot].1, set);
    }

    groups
}

fn group_by_exercise<'a, A, F>(sets: &'a [SetRecord], fold: F) -> Vec<(&'a str, A)>
where
    A: Default,
    F: FnMut(&mut A, &'a SetRecord),
{
    group_by(sets, |set| set.exercise_name.as_str(), fold)
}

fn into_tallies(groups: Vec<(&str, f64)>) -> Vec<Tally> {
    groups
        .into_iter()
        .map(|(name, value)| Tally::new(name, value))
        .collect()
}
