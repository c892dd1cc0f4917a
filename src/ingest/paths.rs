use std::path::{Path, PathBuf};

use crate::core::constants::paths;

/// The two input tables of a run.
///
/// The sessions table is optional: when it is `None` or the file does not
/// exist, date-based charts are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    pub sets: PathBuf,
    pub sessions: Option<PathBuf>,
}

impl InputPaths {
    pub fn new(sets: impl Into<PathBuf>, sessions: Option<PathBuf>) -> Self {
        Self {
            sets: sets.into(),
            sessions,
        }
    }

    /// Pair a sets table with an explicit sessions table, falling back to the
    /// conventional companion file name when none is given
    pub fn resolve(sets: impl Into<PathBuf>, explicit_sessions: Option<PathBuf>) -> Self {
        let sets = sets.into();
        let sessions = explicit_sessions.or_else(|| companion_sessions_path(&sets));
        Self { sets, sessions }
    }
}

/// Best-effort guess of the sessions table that accompanies a sets table:
/// `sets_2025.csv` pairs with `workouts_2025.csv` in the same directory.
///
/// Returns `None` when the file name does not start with a `sets` token.
pub fn companion_sessions_path(sets_path: &Path) -> Option<PathBuf> {
    let file_name = sets_path.file_name()?.to_str()?;
    let rest = file_name.strip_prefix(paths::SETS_PREFIX)?;

    // `sets` must be a whole token, not the start of `setsomething`
    if rest.chars().next().is_some_and(char::is_alphanumeric) {
        return None;
    }

    Some(sets_path.with_file_name(format!("{}{rest}", paths::SESSIONS_PREFIX)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_companion_path_replaces_prefix() {
        assert_eq!(
            companion_sessions_path(Path::new("output/sets_20251017.csv")),
            Some(PathBuf::from("output/workouts_20251017.csv"))
        );
        assert_eq!(
            companion_sessions_path(Path::new("sets.csv")),
            Some(PathBuf::from("workouts.csv"))
        );
        assert_eq!(
            companion_sessions_path(Path::new("data/sets-clean.csv")),
            Some(PathBuf::from("data/workouts-clean.csv"))
        );
    }

    #[test]
    fn test_companion_path_requires_whole_token() {
        assert_eq!(companion_sessions_path(Path::new("setsmith.csv")), None);
        assert_eq!(companion_sessions_path(Path::new("my_sets.csv")), None);
        assert_eq!(companion_sessions_path(Path::new("")), None);
    }

    #[test]
    fn test_companion_path_only_touches_file_name() {
        assert_eq!(
            companion_sessions_path(Path::new("sets_dir/sets_a.csv")),
            Some(PathBuf::from("sets_dir/workouts_a.csv"))
        );
    }

    #[test]
    fn test_resolve_prefers_explicit_sessions() {
        let inputs = InputPaths::resolve("data/sets_a.csv", Some(PathBuf::from("other.csv")));
        assert_eq!(inputs.sessions, Some(PathBuf::from("other.csv")));

        let derived = InputPaths::resolve("data/sets_a.csv", None);
        assert_eq!(derived.sessions, Some(PathBuf::from("data/workouts_a.csv")));

        let none = InputPaths::resolve("data/log.csv", None);
        assert_eq!(none.sessions, None);
    }
}
