//! Console output for a generation run

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::ingest::{LoadReport, SessionsStatus};
use crate::reporting::{ChartId, ChartOutcome, ChartStatus};
use crate::ui::color::{Colors, colorize, label_value};

const RULE_WIDTH: usize = 60;

/// Lines describing what was loaded, printed before generation starts
pub fn load_lines(report: &LoadReport) -> Vec<String> {
    let mut lines = vec![format!("Loaded {} sets", report.sets_loaded)];

    match &report.sessions {
        SessionsStatus::Joined { sessions, .. } => {
            lines.push(format!("Loaded {sessions} workouts"));
        }
        SessionsStatus::NotConfigured => {
            lines.push(colorize(
                "Warning: No workouts file available",
                Colors::YELLOW,
            ));
            lines.push("Time-based visualizations will be skipped.".to_string());
        }
        SessionsStatus::Missing(path) => {
            lines.push(colorize(
                &format!("Warning: Workouts file not found at {}", path.display()),
                Colors::YELLOW,
            ));
            lines.push("Time-based visualizations will be skipped.".to_string());
        }
        SessionsStatus::Unreadable { path, reason } => {
            lines.push(colorize(
                &format!(
                    "Warning: Could not read workouts file {}: {reason}",
                    path.display()
                ),
                Colors::YELLOW,
            ));
            lines.push("Time-based visualizations will be skipped.".to_string());
        }
    }

    lines
}

/// Progress line announcing one generation stage
pub fn stage_line(chart: ChartId) -> String {
    let what = match chart {
        ChartId::SummaryDashboard => chart.description().to_string(),
        _ => format!("{} chart", chart.description()),
    };
    format!("{}. Generating {what}...", chart.stage())
}

/// Result line printed under a stage
pub fn outcome_line(outcome: &ChartOutcome) -> String {
    match &outcome.status {
        ChartStatus::Written(path) => format!(
            "   {} {}",
            colorize("Saved:", Colors::GREEN),
            path.display()
        ),
        ChartStatus::Skipped(reason) => {
            format!("   {} {reason}", colorize("Skipped:", Colors::YELLOW))
        }
        ChartStatus::Failed(message) => {
            format!("   {} {message}", colorize("Failed:", Colors::RED))
        }
    }
}

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Print the header shown before the first stage
pub fn display_run_header(sets_path: &Path, output_dir: &Path) {
    println!("{}", label_value("Input", &sets_path.display().to_string()));
    println!();
    println!("Generating visualizations in: {}", output_dir.display());
    println!("{}", rule());
}

/// Print the closing summary with the sorted list of generated pages
pub fn display_summary(output_dir: &Path, outcomes: &[ChartOutcome]) -> io::Result<()> {
    println!();
    println!("{}", rule());

    let failed = outcomes.iter().filter(|o| o.is_failed()).count();
    if failed == 0 {
        println!(
            "{}",
            colorize(
                &format!("✓ All visualizations saved to: {}", output_dir.display()),
                Colors::GREEN
            )
        );
    } else {
        println!(
            "{}",
            colorize(
                &format!(
                    "✗ {failed} visualization(s) failed; others saved to: {}",
                    output_dir.display()
                ),
                Colors::RED
            )
        );
    }
    println!();
    println!("Open the .html files in your browser to view interactive charts!");
    println!();
    println!("Generated files:");
    for file in list_generated_files(output_dir)? {
        if let Some(name) = file.file_name() {
            println!("  - {}", name.to_string_lossy());
        }
    }

    Ok(())
}

/// Every `.html` file in `dir`, sorted by path
pub fn list_generated_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "html"))
        .collect();
    files.sort();
    Ok(files)
}
