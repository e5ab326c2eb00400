//! Parsers for roster files.
//!
//! Two shapes are supported:
//! - delimited text (CSV/TSV) with a header row
//! - a JSON array of flat objects, the shape a spreadsheet export of
//!   "all records" produces
//!
//! Header cells and object keys are trimmed here, so downstream code can look
//! fields up by their exact contract names.

use crate::error::{Result, RosterError};
use crate::types::RawRecord;
use serde_json::Value;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read a whole file as UTF-8, stripping a leading byte-order mark
///
/// Spreadsheet exports frequently start with a BOM, which would otherwise
/// end up glued to the first header name.
fn read_text(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => RosterError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => RosterError::IoError(e),
    })?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;

    match content.strip_prefix('\u{feff}') {
        Some(stripped) => Ok(stripped.to_string()),
        None => Ok(content),
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// =============================================================================
// Delimited Text
// =============================================================================

/// A row of cells plus the line on which the row started
struct Row {
    line: usize,
    cells: Vec<String>,
}

/// Split delimited text into rows of cells.
///
/// Handles double-quoted cells, `""` escapes, and delimiters or line breaks
/// inside quotes. Rows that contain nothing but whitespace are dropped.
fn split_rows(content: &str, delimiter: char, file: &str) -> Result<Vec<Row>> {
    let mut rows = Vec::new();
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut row_start = 1;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    cell.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    cell.push(c);
                }
                _ => cell.push(c),
            }
            continue;
        }

        match c {
            '"' if cell.is_empty() => in_quotes = true,
            c if c == delimiter => cells.push(std::mem::take(&mut cell)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                cells.push(std::mem::take(&mut cell));
                push_row(&mut rows, row_start, std::mem::take(&mut cells));
                line += 1;
                row_start = line;
            }
            _ => cell.push(c),
        }
    }

    if in_quotes {
        return Err(RosterError::ParseError {
            file: file.to_string(),
            line: row_start,
            reason: "Unterminated quoted field".to_string(),
        });
    }

    if !cell.is_empty() || !cells.is_empty() {
        cells.push(cell);
        push_row(&mut rows, row_start, cells);
    }

    Ok(rows)
}

fn push_row(rows: &mut Vec<Row>, line: usize, cells: Vec<String>) {
    let blank = cells.iter().all(|c| c.trim().is_empty());
    if !blank {
        rows.push(Row { line, cells });
    }
}

/// Parse delimited text with a header row into raw records.
///
/// # Arguments
/// * `content` - The full file contents
/// * `delimiter` - Cell separator, typically `,` or `\t`
/// * `file` - Name used in error messages
///
/// # Returns
/// * `Ok(Vec<RawRecord>)` - One record per data row, in file order
/// * `Err(FieldCountMismatch)` - If a row is wider or narrower than the header
pub fn parse_delimited_str(content: &str, delimiter: char, file: &str) -> Result<Vec<RawRecord>> {
    let mut rows = split_rows(content, delimiter, file)?.into_iter();

    let header = match rows.next() {
        Some(row) => row,
        None => return Ok(Vec::new()),
    };
    let names: Vec<String> = header.cells.iter().map(|c| c.trim().to_string()).collect();

    if let Some(pos) = names.iter().position(|n| n.is_empty()) {
        return Err(RosterError::ParseError {
            file: file.to_string(),
            line: header.line,
            reason: format!("Empty column name at position {}", pos + 1),
        });
    }

    let mut records: Vec<RawRecord> = Vec::new();
    for row in rows {
        if row.cells.len() != names.len() {
            return Err(RosterError::FieldCountMismatch {
                expected: names.len(),
                found: row.cells.len(),
                line: row.line,
            });
        }
        records.push(names.iter().cloned().zip(row.cells).collect());
    }

    Ok(records)
}

/// Parse a delimited roster file from disk
pub fn parse_delimited(path: &Path, delimiter: char) -> Result<Vec<RawRecord>> {
    let content = read_text(path)?;
    parse_delimited_str(&content, delimiter, &file_label(path))
}

// =============================================================================
// JSON Records
// =============================================================================

/// Render a scalar JSON value the way a spreadsheet cell would read.
///
/// `null` means "no value" and is dropped from the record.
fn scalar_to_string(value: &Value) -> Option<std::result::Result<String, &'static str>> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(Ok(s.clone())),
        Value::Bool(b) => Some(Ok(b.to_string())),
        Value::Number(n) => Some(Ok(n.to_string())),
        Value::Array(_) => Some(Err("arrays are not supported as field values")),
        Value::Object(_) => Some(Err("nested objects are not supported as field values")),
    }
}

/// Parse a JSON array of objects into raw records
pub fn parse_json_str(content: &str) -> Result<Vec<RawRecord>> {
    let value: Value = serde_json::from_str(content)?;

    let entries = match value {
        Value::Array(entries) => entries,
        _ => {
            return Err(RosterError::InvalidRecord {
                index: 0,
                reason: "expected a JSON array of records".to_string(),
            });
        }
    };

    let mut records = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.iter().enumerate() {
        let object = entry.as_object().ok_or_else(|| RosterError::InvalidRecord {
            index: idx + 1,
            reason: "expected an object".to_string(),
        })?;

        let mut record = RawRecord::new();
        for (key, value) in object {
            match scalar_to_string(value) {
                None => {}
                Some(Ok(text)) => record.insert(key.trim(), text),
                Some(Err(reason)) => {
                    return Err(RosterError::InvalidRecord {
                        index: idx + 1,
                        reason: format!("field '{}': {}", key.trim(), reason),
                    });
                }
            }
        }
        records.push(record);
    }

    Ok(records)
}

/// Parse a JSON roster file from disk
pub fn parse_json(path: &Path) -> Result<Vec<RawRecord>> {
    let content = read_text(path)?;
    parse_json_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_names_are_trimmed() {
        let records = parse_delimited_str(" Full Name , major \nAlice,CS\n", ',', "t.csv").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("Full Name"), Some("Alice"));
        assert_eq!(records[0].get("major"), Some("CS"));
    }

    #[test]
    fn test_quoted_cells() {
        let content = "Full Name,CStopics\n\"Lee, Ann\",\"AI, \"\"ML\"\"\"\n";
        let records = parse_delimited_str(content, ',', "t.csv").unwrap();
        assert_eq!(records[0].get("Full Name"), Some("Lee, Ann"));
        assert_eq!(records[0].get("CStopics"), Some("AI, \"ML\""));
    }

    #[test]
    fn test_newline_inside_quotes() {
        let content = "Full Name,Hobbies\r\nBob,\"chess\nhiking\"\r\nCara,go\r\n";
        let records = parse_delimited_str(content, ',', "t.csv").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("Hobbies"), Some("chess\nhiking"));
        assert_eq!(records[1].get("Full Name"), Some("Cara"));
    }

    #[test]
    fn test_blank_lines_skipped_and_no_trailing_newline() {
        let content = "Full Name\tmajor\n\nAlice\tMath\n\nBob\tArt";
        let records = parse_delimited_str(content, '\t', "t.tsv").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get("major"), Some("Art"));
    }

    #[test]
    fn test_field_count_mismatch_reports_line() {
        let content = "a,b\n1,2\n3\n";
        let err = parse_delimited_str(content, ',', "t.csv").unwrap_err();
        assert!(matches!(
            err,
            RosterError::FieldCountMismatch { expected: 2, found: 1, line: 3 }
        ));
    }

    #[test]
    fn test_unterminated_quote() {
        let err = parse_delimited_str("a\n\"oops\n", ',', "t.csv").unwrap_err();
        assert!(matches!(err, RosterError::ParseError { line: 2, .. }));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_delimited_str("", ',', "t.csv").unwrap().is_empty());
        assert!(parse_delimited_str("a,b\n", ',', "t.csv").unwrap().is_empty());
    }

    #[test]
    fn test_json_scalars_and_nulls() {
        let content = r#"[{" Full Name ": "Alice", "major": "CS", "Year": 3, "Activities": null}]"#;
        let records = parse_json_str(content).unwrap();
        assert_eq!(records[0].get("Full Name"), Some("Alice"));
        assert_eq!(records[0].get("Year"), Some("3"));
        assert_eq!(records[0].get("Activities"), None);
    }

    #[test]
    fn test_json_rejects_non_objects() {
        let err = parse_json_str(r#"[{"a": "b"}, 5]"#).unwrap_err();
        assert!(matches!(err, RosterError::InvalidRecord { index: 2, .. }));

        let err = parse_json_str(r#"{"a": "b"}"#).unwrap_err();
        assert!(matches!(err, RosterError::InvalidRecord { .. }));
    }
}
