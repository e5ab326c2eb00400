//! Roster sources.
//!
//! A `RosterSource` is whatever can hand back a validated roster: a local
//! delimited file, a JSON export, or something an embedding application
//! provides. The entry point receives sources as values, so nothing here
//! holds global connection state.

use crate::error::Result;
use crate::parser;
use crate::types::{RawRecord, Role, Roster};
use std::path::{Path, PathBuf};
use tracing::info;

/// Anything that can produce one roster
///
/// ## Design Note
/// - `fetch` validates rows into `PersonRecord`s, so a missing required field
///   surfaces here as `RosterError::MissingField` and no roster is returned
pub trait RosterSource {
    /// Short description for logs, e.g. the file path
    fn describe(&self) -> String;

    /// Load the raw rows in source order
    fn fetch_raw(&self) -> Result<Vec<RawRecord>>;

    /// Load and validate the roster for `role`
    fn fetch(&self, role: Role) -> Result<Roster> {
        let rows = self.fetch_raw()?;
        let roster = Roster::from_raw(role, &rows)?;
        info!("Loaded {} {} records from {}", roster.len(), role, self.describe());
        Ok(roster)
    }
}

/// File formats the bundled sources understand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Tsv,
    Json,
}

impl InputFormat {
    /// Guess the format from a file extension, defaulting to CSV
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => InputFormat::Json,
            Some("tsv") | Some("tab") => InputFormat::Tsv,
            _ => InputFormat::Csv,
        }
    }
}

/// Reads a roster from a delimited text file with a header row
#[derive(Debug, Clone)]
pub struct DelimitedFileSource {
    path: PathBuf,
    delimiter: char,
}

impl DelimitedFileSource {
    /// Comma-separated source
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: ',',
        }
    }

    /// Override the delimiter (builder pattern)
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl RosterSource for DelimitedFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch_raw(&self) -> Result<Vec<RawRecord>> {
        parser::parse_delimited(&self.path, self.delimiter)
    }
}

/// Reads a roster from a JSON array of objects
#[derive(Debug, Clone)]
pub struct JsonRecordsSource {
    path: PathBuf,
}

impl JsonRecordsSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RosterSource for JsonRecordsSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch_raw(&self) -> Result<Vec<RawRecord>> {
        parser::parse_json(&self.path)
    }
}

/// Rows already in memory, e.g. handed over by an embedding application
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    rows: Vec<RawRecord>,
}

impl InMemorySource {
    pub fn new(rows: Vec<RawRecord>) -> Self {
        Self { rows }
    }
}

impl RosterSource for InMemorySource {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    fn fetch_raw(&self) -> Result<Vec<RawRecord>> {
        Ok(self.rows.clone())
    }
}

/// Build the matching file source for a path.
///
/// # Arguments
/// * `path` - Roster file
/// * `format` - Explicit format, or `None` to infer from the extension
pub fn open(path: impl Into<PathBuf>, format: Option<InputFormat>) -> Box<dyn RosterSource> {
    let path = path.into();
    match format.unwrap_or_else(|| InputFormat::from_path(&path)) {
        InputFormat::Csv => Box::new(DelimitedFileSource::new(path)),
        InputFormat::Tsv => Box::new(DelimitedFileSource::new(path).with_delimiter('\t')),
        InputFormat::Json => Box::new(JsonRecordsSource::new(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(InputFormat::from_path(Path::new("a/mentors.json")), InputFormat::Json);
        assert_eq!(InputFormat::from_path(Path::new("mentees.TSV")), InputFormat::Tsv);
        assert_eq!(InputFormat::from_path(Path::new("mentees.csv")), InputFormat::Csv);
        assert_eq!(InputFormat::from_path(Path::new("mentees")), InputFormat::Csv);
    }

    #[test]
    fn test_in_memory_fetch_validates() {
        let rows = vec![
            RawRecord::new()
                .with("Full Name", "Alice")
                .with("major", "CS")
                .with("CStopics", "AI")
                .with("Hobbies", "chess"),
            RawRecord::new().with("Full Name", "Bob").with("major", "Math"),
        ];
        let err = InMemorySource::new(rows).fetch(Role::Mentor).unwrap_err();
        match err {
            RosterError::MissingField { record, field, .. } => {
                assert_eq!(record, "Bob");
                assert_eq!(field, "CStopics");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = DelimitedFileSource::new("/definitely/not/here.csv")
            .fetch(Role::Mentee)
            .unwrap_err();
        assert!(matches!(err, RosterError::FileNotFound { .. }));
    }
}
