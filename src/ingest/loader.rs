use chrono::NaiveDate;
use log::{debug, info, warn};
use rustc_hash::FxHashMap;
use std::path::PathBuf;

use crate::core::error::Result;
use crate::core::types::{Dataset, SessionRecord, SetRecord};
use crate::ingest::paths::InputPaths;
use crate::ingest::reader::{load_sessions, load_sets};

/// What happened to the sessions table during loading
#[derive(Debug, Clone, PartialEq)]
pub enum SessionsStatus {
    /// Sessions were read and joined onto the sets
    Joined { path: PathBuf, sessions: usize },
    /// No sessions path was given or derivable
    NotConfigured,
    /// The sessions path does not exist
    Missing(PathBuf),
    /// The file exists but could not be parsed
    Unreadable { path: PathBuf, reason: String },
}

impl SessionsStatus {
    pub fn is_joined(&self) -> bool {
        matches!(self, SessionsStatus::Joined { .. })
    }
}

/// Counters describing a load, used for console output
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub sets_path: PathBuf,
    pub sets_loaded: usize,
    /// Numeric cells replaced by 0 because they were malformed
    pub repaired_values: usize,
    pub sessions: SessionsStatus,
    /// Sessions whose date could not be parsed
    pub undated_sessions: usize,
    /// Sets whose session id has no match in the sessions table
    pub unmatched_sets: usize,
}

/// Load the sets table and, when available, join session dates onto it.
///
/// A missing or unparsable sets table is an error. Problems with the
/// sessions table only downgrade the dataset to "no session data".
pub fn load_dataset(inputs: &InputPaths) -> Result<(Dataset, LoadReport)> {
    info!("Loading sets from {}", inputs.sets.display());
    let sets_table = load_sets(&inputs.sets)?;

    let mut report = LoadReport {
        sets_path: inputs.sets.clone(),
        sets_loaded: sets_table.records.len(),
        repaired_values: sets_table.repaired_values,
        sessions: SessionsStatus::NotConfigured,
        undated_sessions: 0,
        unmatched_sets: 0,
    };

    let sessions = match inputs.sessions {
        None => None,
        Some(ref path) if !path.exists() => {
            warn!("Sessions file not found at {}", path.display());
            report.sessions = SessionsStatus::Missing(path.clone());
            None
        }
        Some(ref path) => match load_sessions(path) {
            Ok(table) => {
                info!(
                    "Loaded {} sessions from {}",
                    table.records.len(),
                    path.display()
                );
                report.undated_sessions = table.undated;
                report.sessions = SessionsStatus::Joined {
                    path: path.clone(),
                    sessions: table.records.len(),
                };
                Some(table.records)
            }
            Err(e) => {
                warn!("Could not read sessions file {}: {e}", path.display());
                report.sessions = SessionsStatus::Unreadable {
                    path: path.clone(),
                    reason: e.to_string(),
                };
                None
            }
        },
    };

    let sets = match sessions {
        Some(ref sessions) => {
            let (joined, unmatched) = join_session_dates(sets_table.records, sessions);
            report.unmatched_sets = unmatched;
            joined
        }
        None => sets_table.records,
    };

    debug!(
        "Dataset ready: {} sets, {} repaired values, {} unmatched sets",
        report.sets_loaded, report.repaired_values, report.unmatched_sets
    );
    Ok((Dataset::new(sets, sessions), report))
}

/// Left join: attach each set's session date, leaving it empty when the
/// session is unknown or undated. The first row wins for duplicate ids.
///
/// Returns the joined sets and how many had no matching session.
pub fn join_session_dates(
    sets: Vec<SetRecord>,
    sessions: &[SessionRecord],
) -> (Vec<SetRecord>, usize) {
    let mut dates: FxHashMap<&str, Option<NaiveDate>> =
        FxHashMap::with_capacity_and_hasher(sessions.len(), Default::default());
    for session in sessions {
        dates
            .entry(session.session_id.as_str())
            .or_insert(session.session_date);
    }

    let mut unmatched = 0;
    let joined = sets
        .into_iter()
        .map(|mut set| {
            match dates.get(set.session_id.as_str()) {
                Some(date) => set.session_date = *date,
                None => {
                    unmatched += 1;
                    set.session_date = None;
                }
            }
            set
        })
        .collect();

    (joined, unmatched)
}
