//! Result sinks: where a finished pairing table goes.
//!
//! Sinks receive the complete, ordered result sequence once the pass is done.
//! They never see partial output.

use crate::error::{MatchError, Result};
use crate::types::PairingResult;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Column headers of a persisted pairing table
pub const HEADER: [&str; 3] = ["Mentee", "Mentor", "Score"];

/// Default file name for the CSV pairing table
pub const DEFAULT_CSV_PATH: &str = "mentor_mentee_pairings.csv";

/// Destination for a finished pairing table
pub trait ResultSink {
    /// Short description for logs
    fn describe(&self) -> String;

    fn write(&mut self, results: &[PairingResult]) -> Result<()>;
}

/// Open a file for writing, optionally refusing to replace an existing one
fn create_file(path: &Path, fresh: bool) -> Result<File> {
    let mut options = OpenOptions::new();
    options.write(true);
    if fresh {
        options.create_new(true);
    } else {
        options.create(true).truncate(true);
    }

    options.open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::AlreadyExists => MatchError::OutputExists {
            path: path.to_path_buf(),
        },
        _ => MatchError::Io(e),
    })
}

// =============================================================================
// CSV
// =============================================================================

/// Quote a cell when it contains the delimiter, a quote or a line break
fn escape_cell(value: &str, delimiter: char) -> String {
    if value.contains([delimiter, '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Write the pairing table as delimited text.
///
/// An absent mentor becomes an empty cell.
pub fn write_delimited<W: Write>(
    writer: &mut W,
    results: &[PairingResult],
    delimiter: char,
) -> std::io::Result<()> {
    let sep = delimiter.to_string();
    writeln!(writer, "{}", HEADER.join(&sep))?;
    for result in results {
        writeln!(
            writer,
            "{}{sep}{}{sep}{}",
            escape_cell(&result.mentee, delimiter),
            escape_cell(result.mentor.as_deref().unwrap_or_default(), delimiter),
            result.score,
        )?;
    }
    Ok(())
}

/// Writes the pairing table to a local CSV file
#[derive(Debug, Clone)]
pub struct CsvFileSink {
    path: PathBuf,
    delimiter: char,
    fresh: bool,
}

impl CsvFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: ',',
            fresh: false,
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Fail instead of overwriting an existing file
    pub fn fresh(mut self, fresh: bool) -> Self {
        self.fresh = fresh;
        self
    }
}

impl ResultSink for CsvFileSink {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn write(&mut self, results: &[PairingResult]) -> Result<()> {
        let file = create_file(&self.path, self.fresh)?;
        let mut writer = BufWriter::new(file);
        write_delimited(&mut writer, results, self.delimiter)?;
        writer.flush()?;
        info!("Wrote {} pairings to {}", results.len(), self.path.display());
        Ok(())
    }
}

// =============================================================================
// JSON
// =============================================================================

/// Writes the pairing table as a pretty-printed JSON array
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
    fresh: bool,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            fresh: false,
        }
    }

    pub fn fresh(mut self, fresh: bool) -> Self {
        self.fresh = fresh;
        self
    }
}

impl ResultSink for JsonFileSink {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn write(&mut self, results: &[PairingResult]) -> Result<()> {
        let file = create_file(&self.path, self.fresh)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, results)?;
        writeln!(writer)?;
        writer.flush()?;
        info!("Wrote {} pairings to {}", results.len(), self.path.display());
        Ok(())
    }
}

// =============================================================================
// Memory
// =============================================================================

/// Keeps the last written table in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub results: Vec<PairingResult>,
}

impl ResultSink for MemorySink {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    fn write(&mut self, results: &[PairingResult]) -> Result<()> {
        self.results = results.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<PairingResult> {
        vec![
            PairingResult::new("Bob", Some("Alice".to_string()), 400),
            PairingResult::new("Lee, Ann", None, 0),
        ]
    }

    #[test]
    fn test_write_delimited() {
        let mut out = Vec::new();
        write_delimited(&mut out, &sample(), ',').unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Mentee,Mentor,Score\nBob,Alice,400\n\"Lee, Ann\",,0\n");
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("plain", ','), "plain");
        assert_eq!(escape_cell("say \"hi\"", ','), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_cell("a,b", '\t'), "a,b");
        assert_eq!(escape_cell("a\tb", '\t'), "\"a\tb\"");
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(&sample()).unwrap();
        assert_eq!(value[0]["Mentee"], "Bob");
        assert_eq!(value[0]["Mentor"], "Alice");
        assert_eq!(value[0]["Score"], 400);
        assert!(value[1]["Mentor"].is_null());
    }

    #[test]
    fn test_fresh_sink_refuses_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairings.csv");
        std::fs::write(&path, "old").unwrap();

        let err = CsvFileSink::new(&path).fresh(true).write(&sample()).unwrap_err();
        assert!(matches!(err, MatchError::OutputExists { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "old");

        CsvFileSink::new(&path).write(&sample()).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().starts_with("Mentee,Mentor,Score"));
    }

    #[test]
    fn test_tab_delimited_file_sink() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairings.tsv");

        let mut sink = CsvFileSink::new(&path).with_delimiter('\t');
        assert_eq!(sink.describe(), path.display().to_string());
        sink.write(&sample()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "Mentee\tMentor\tScore\nBob\tAlice\t400\nLee, Ann\t\t0\n");
    }

    #[test]
    fn test_memory_sink() {
        let mut sink = MemorySink::default();
        assert_eq!(sink.describe(), "memory");
        sink.write(&sample()).unwrap();
        assert_eq!(sink.results, sample());
    }
}
