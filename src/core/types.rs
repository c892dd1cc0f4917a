use chrono::NaiveDate;
use std::fmt;

/// One logged exercise set.
///
/// Numeric fields are already repaired when a record exists: malformed or
/// negative input, and any weight whose volume would overflow, has been
/// replaced by zero, so `volume()` is always a finite, non-negative number.
#[derive(Debug, Clone, PartialEq)]
pub struct SetRecord {
    /// Session this set belongs to
    pub session_id: String,
    /// Name of the performed exercise
    pub exercise_name: String,
    /// Repetitions performed
    pub reps: u32,
    /// Load lifted per repetition
    pub weight: f64,
    /// Date of the owning session, when session data was joined
    pub session_date: Option<NaiveDate>,
}

impl SetRecord {
    pub fn new(
        session_id: impl Into<String>,
        exercise_name: impl Into<String>,
        reps: u32,
        weight: f64,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            exercise_name: exercise_name.into(),
            reps,
            weight: sanitize_weight(reps, weight),
            session_date: None,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.session_date = Some(date);
        self
    }

    /// Workload of the set: reps × weight
    pub fn volume(&self) -> f64 {
        f64::from(self.reps) * self.weight
    }
}

impl fmt::Display for SetRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} x {} ({})",
            self.exercise_name, self.reps, self.weight, self.session_id
        )
    }
}

/// One workout session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub session_id: String,
    /// `None` when the source date could not be parsed
    pub session_date: Option<NaiveDate>,
}

impl SessionRecord {
    pub fn new(session_id: impl Into<String>, session_date: Option<NaiveDate>) -> Self {
        Self {
            session_id: session_id.into(),
            session_date,
        }
    }
}

/// Set records joined with the optional session table.
///
/// `sessions` is `None` when no session data could be loaded; aggregates
/// that need dates report themselves as skipped in that case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub sets: Vec<SetRecord>,
    pub sessions: Option<Vec<SessionRecord>>,
}

impl Dataset {
    pub fn new(sets: Vec<SetRecord>, sessions: Option<Vec<SessionRecord>>) -> Self {
        Self { sets, sessions }
    }

    /// Whether session dates were joined onto the sets
    pub fn has_session_data(&self) -> bool {
        self.sessions.is_some()
    }

    pub fn total_volume(&self) -> f64 {
        self.sets.iter().map(SetRecord::volume).sum()
    }
}

/// Clamp a weight to the finite, non-negative range, zeroing it when
/// `reps × weight` would not be finite
pub fn sanitize_weight(reps: u32, weight: f64) -> f64 {
    if weight.is_finite() && weight > 0.0 && volume_fits(reps, weight) {
        weight
    } else {
        0.0
    }
}

/// Whether `reps × weight` is a finite number
pub fn volume_fits(reps: u32, weight: f64) -> bool {
    (f64::from(reps) * weight).is_finite()
}
