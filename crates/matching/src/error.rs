//! Error types for the matching crate.

use roster::RosterError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    /// A roster failed to load or validate; the pass never started
    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A fresh sink was requested but the target already exists
    #[error("Refusing to overwrite existing output: {}", path.display())]
    OutputExists { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, MatchError>;
