//! CSV readers for the sets and sessions tables

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;
use std::io::Read;
use std::path::Path;

use crate::core::constants::columns;
use crate::core::error::{Result, WorkoutVizError};
use crate::core::types::{SessionRecord, SetRecord, volume_fits};

/// Parsed sets table together with how many numeric cells had to be repaired
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetsTable {
    pub records: Vec<SetRecord>,
    pub repaired_values: usize,
}

/// Parsed sessions table together with how many dates were unreadable
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionsTable {
    pub records: Vec<SessionRecord>,
    pub undated: usize,
}

/// Datetime layouts accepted for `session_date`, tried in order
const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Date-only layouts accepted for `session_date`, tried in order
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Read the sets table at `path`
pub fn load_sets<P: AsRef<Path>>(path: P) -> Result<SetsTable> {
    let path = path.as_ref();
    ensure_file(path)?;
    let reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)?;
    read_sets(reader)
}

/// Parse a sets table from any reader (header row required)
pub fn parse_sets<R: Read>(input: R) -> Result<SetsTable> {
    let reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);
    read_sets(reader)
}

/// Read the sessions table at `path`
pub fn load_sessions<P: AsRef<Path>>(path: P) -> Result<SessionsTable> {
    let path = path.as_ref();
    ensure_file(path)?;
    let reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)?;
    read_sessions(reader)
}

/// Parse a sessions table from any reader (header row required)
pub fn parse_sessions<R: Read>(input: R) -> Result<SessionsTable> {
    let reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);
    read_sessions(reader)
}

fn ensure_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(WorkoutVizError::FileNotFound(path.display().to_string()))
    }
}

fn read_sets<R: Read>(mut reader: csv::Reader<R>) -> Result<SetsTable> {
    let headers = reader.headers()?.clone();
    let session_idx = required_column(&headers, columns::SESSION_ID)?;
    let exercise_idx = required_column(&headers, columns::EXERCISE_NAME)?;
    let reps_idx = find_column(&headers, columns::REPS);
    let weight_idx = find_column(&headers, columns::WEIGHT);

    if reps_idx.is_none() || weight_idx.is_none() {
        debug!("Sets table lacks a reps or weight column, missing values count as 0");
    }

    let mut table = SetsTable::default();
    for row in reader.records() {
        let row = row?;
        let reps = cell(&row, reps_idx).and_then(parse_reps);
        let weight = cell(&row, weight_idx)
            .and_then(parse_weight)
            .filter(|&w| volume_fits(reps.unwrap_or(0), w));
        table.repaired_values += usize::from(reps.is_none()) + usize::from(weight.is_none());

        table.records.push(SetRecord::new(
            cell(&row, Some(session_idx)).unwrap_or_default(),
            cell(&row, Some(exercise_idx)).unwrap_or_default(),
            reps.unwrap_or(0),
            weight.unwrap_or(0.0),
        ));
    }

    debug!(
        "Parsed {} set rows ({} numeric values repaired)",
        table.records.len(),
        table.repaired_values
    );
    Ok(table)
}

fn read_sessions<R: Read>(mut reader: csv::Reader<R>) -> Result<SessionsTable> {
    let headers = reader.headers()?.clone();
    let session_idx = required_column(&headers, columns::SESSION_ID)?;
    let date_idx = required_column(&headers, columns::SESSION_DATE)?;

    let mut table = SessionsTable::default();
    for row in reader.records() {
        let row = row?;
        let date = cell(&row, Some(date_idx)).and_then(parse_date);
        if date.is_none() {
            table.undated += 1;
        }
        table.records.push(SessionRecord::new(
            cell(&row, Some(session_idx)).unwrap_or_default(),
            date,
        ));
    }

    Ok(table)
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim_start_matches('\u{feff}').trim() == name)
}

fn required_column(headers: &StringRecord, name: &str) -> Result<usize> {
    find_column(headers, name).ok_or_else(|| WorkoutVizError::MissingColumn(name.to_string()))
}

fn cell(row: &StringRecord, idx: Option<usize>) -> Option<&str> {
    idx.and_then(|i| row.get(i))
}

/// Parse a repetition count; decimals truncate, anything else is rejected
pub fn parse_reps(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if let Ok(reps) = raw.parse::<u32>() {
        return Some(reps);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => {
            Some(value.trunc().min(f64::from(u32::MAX)) as u32)
        }
        _ => None,
    }
}

/// Parse a weight; negative and non-finite values are rejected
pub fn parse_weight(raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Some(value),
        Ok(value) if value == 0.0 => Some(0.0),
        _ => None,
    }
}

/// Parse a session date, keeping only the calendar day
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(datetime.date());
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}
