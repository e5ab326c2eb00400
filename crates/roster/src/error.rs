//! Error types for the roster crate.
//!
//! Every failure that can happen while turning an external roster into typed
//! records ends up here. The matcher never sees a half-validated roster:
//! either every record converts or the whole load fails.

use crate::types::Role;
use thiserror::Error;

/// Errors that can occur while loading and validating a roster
///
/// Rust concept: `#[derive(Error)]` from thiserror implements
/// `std::error::Error` and `Display` from the `#[error(...)]` attributes
#[derive(Error, Debug)]
pub enum RosterError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in a delimited file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A data row has a different number of cells than the header
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    /// A JSON roster entry is not a flat object of scalar values
    #[error("Invalid record #{index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    /// JSON roster could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required attribute is absent from a person record
    ///
    /// `record` is the record's `Full Name` when it has one, otherwise a
    /// positional label such as `mentee #3`.
    #[error("{role} record '{record}' is missing required field '{field}'")]
    MissingField {
        role: Role,
        record: String,
        field: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RosterError>;
