//! Property-based tests for workout-viz using proptest
//!
//! These tests generate random workout logs to check that aggregation
//! stays consistent and that the CLI never fails on valid-but-odd input.

use assert_cmd::prelude::*;
use proptest::prelude::*;
use std::process::Command;
use tempfile::TempDir;

use workout_viz::analysis::{
    exercise_frequency, sets_per_workout, summary_statistics, top_exercises_by_volume,
};
use workout_viz::ingest::reader::{parse_reps, parse_sets, parse_weight};
use workout_viz::reporting::dashboard::{escape_html, script_safe_json};
use workout_viz::reporting::histogram;
use workout_viz::{Dataset, SetRecord};

const NAME: &str = "workout-viz";

/// Generate exercise names, including a few awkward ones
fn exercise_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Bench Press".to_string()),
        Just("Squat".to_string()),
        Just("Deadlift".to_string()),
        Just("Row".to_string()),
        r"[A-Za-z ]{1,12}",
        Just("<Curl & \"Press\">".to_string()),
    ]
}

/// Generate raw numeric cells as they may appear in a messy export
fn numeric_cell_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..50).prop_map(|n| n.to_string()),
        (0.0f64..300.0).prop_map(|x| format!("{x:.1}")),
        Just(String::new()),
        Just("-5".to_string()),
        Just("abc".to_string()),
        Just("NaN".to_string()),
        Just("inf".to_string()),
    ]
}

fn set_strategy() -> impl Strategy<Value = SetRecord> {
    (1u32..8, exercise_strategy(), 0u32..30, 0.0f64..250.0).prop_map(
        |(session, name, reps, weight)| SetRecord::new(session.to_string(), name, reps, weight),
    )
}

fn sets_strategy() -> impl Strategy<Value = Vec<SetRecord>> {
    prop::collection::vec(set_strategy(), 0..60)
}

fn distinct_names(sets: &[SetRecord]) -> usize {
    let mut names: Vec<&str> = sets.iter().map(|s| s.exercise_name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    names.len()
}

proptest! {
    #[test]
    fn test_volume_is_never_negative(sets in sets_strategy()) {
        for set in &sets {
            prop_assert!(set.volume() >= 0.0);
            prop_assert_eq!(set.volume(), f64::from(set.reps) * set.weight);
        }
    }

    #[test]
    fn test_repaired_numbers_are_non_negative(raw in numeric_cell_strategy()) {
        if let Some(weight) = parse_weight(&raw) {
            prop_assert!(weight.is_finite() && weight >= 0.0);
        }
    }

    #[test]
    fn test_parse_reps_rejects_malformed_cells(
        raw in prop_oneof![Just(""), Just("abc"), Just("-5"), Just("NaN"), Just("inf"), Just("-0.5x")]
    ) {
        prop_assert_eq!(parse_reps(raw), None);
    }

    #[test]
    fn test_parse_reps_reads_whole_and_decimal_counts(reps in 0u32..1000, tenths in 0u32..10) {
        prop_assert_eq!(parse_reps(&reps.to_string()), Some(reps));
        prop_assert_eq!(parse_reps(&format!(" {reps} ")), Some(reps));
        prop_assert_eq!(parse_reps(&format!("{reps}.{tenths}")), Some(reps));
    }

    #[test]
    fn test_parsed_csv_values_are_non_negative(
        rows in prop::collection::vec(
            (exercise_strategy(), numeric_cell_strategy(), numeric_cell_strategy()),
            0..20,
        )
    ) {
        let mut csv = String::from("session_id,exercise_name,reps,weight\n");
        for (i, (name, reps, weight)) in rows.iter().enumerate() {
            let name = name.replace('"', "");
            csv.push_str(&format!("{},\"{}\",{},{}\n", i % 3, name, reps, weight));
        }

        let table = parse_sets(csv.as_bytes()).unwrap();
        prop_assert_eq!(table.records.len(), rows.len());
        for record in &table.records {
            prop_assert!(record.weight.is_finite() && record.weight >= 0.0);
            prop_assert!(record.volume() >= 0.0);
        }
    }

    #[test]
    fn test_top_exercises_bounds_and_order(sets in sets_strategy(), limit in 1usize..15) {
        let table = top_exercises_by_volume(&sets, limit);

        prop_assert_eq!(table.len(), limit.min(distinct_names(&sets)));
        for pair in table.entries.windows(2) {
            prop_assert!(pair[0].value >= pair[1].value);
        }

        let total: f64 = sets.iter().map(SetRecord::volume).sum();
        prop_assert!(table.total() <= total + 1e-6 * total.max(1.0));
    }

    #[test]
    fn test_exercise_frequency_counts_distinct_sessions(sets in sets_strategy()) {
        let table = exercise_frequency(&sets, 15);
        let sessions = sets_per_workout(&sets).values.len() as f64;

        prop_assert_eq!(table.len(), 15.min(distinct_names(&sets)));
        for pair in table.entries.windows(2) {
            prop_assert!(pair[0].value >= pair[1].value);
        }
        for entry in &table.entries {
            prop_assert!(entry.value >= 1.0);
            prop_assert!(entry.value <= sessions);
        }
    }

    #[test]
    fn test_sets_per_workout_sums_to_set_count(sets in sets_strategy()) {
        let distribution = sets_per_workout(&sets);
        let total: f64 = distribution.values.iter().sum();
        prop_assert_eq!(total as usize, sets.len());
    }

    #[test]
    fn test_aggregation_is_deterministic(sets in sets_strategy()) {
        let dataset = Dataset::new(sets, None);
        let first = summary_statistics(&dataset);
        let second = summary_statistics(&dataset);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_histogram_keeps_every_value(
        values in prop::collection::vec(0.0f64..500.0, 0..100),
        bins in 1usize..50,
    ) {
        let buckets = histogram(&values, bins);

        prop_assert!(buckets.len() <= bins);
        prop_assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), values.len());
        for bucket in &buckets {
            prop_assert!(bucket.lower <= bucket.upper);
        }
    }

    #[test]
    fn test_escaping_removes_markup(text in ".{0,40}") {
        let escaped = escape_html(&text);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));

        let json = serde_json::to_string(&text).unwrap();
        let safe = script_safe_json(&json);
        prop_assert!(!safe.contains('<'));
        let decoded: String = serde_json::from_str(&safe).unwrap();
        prop_assert_eq!(decoded, text);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn test_cli_handles_random_logs(
        rows in prop::collection::vec(
            (1u32..5, r"[A-Za-z]{1,10}", numeric_cell_strategy(), numeric_cell_strategy()),
            0..25,
        ),
        with_sessions in any::<bool>(),
    ) {
        let dir = TempDir::new().unwrap();
        let mut sets = String::from("session_id,exercise_name,reps,weight\n");
        for (session, name, reps, weight) in &rows {
            sets.push_str(&format!("{session},{name},{reps},{weight}\n"));
        }
        std::fs::write(dir.path().join("sets_clean.csv"), sets).unwrap();
        if with_sessions {
            std::fs::write(
                dir.path().join("workouts_clean.csv"),
                "session_id,session_date\n1,2025-10-13\n2,2025-10-20\n3,not a date\n",
            )
            .unwrap();
        }

        let mut cmd = Command::cargo_bin(NAME).unwrap();
        cmd.current_dir(dir.path())
            .args(["sets_clean.csv", "--no-config", "--quiet"]);
        cmd.assert().success();

        let expected = if with_sessions { 6 } else { 4 };
        let written = std::fs::read_dir(dir.path().join("visualizations"))
            .unwrap()
            .count();
        prop_assert_eq!(written, expected);
    }
}
