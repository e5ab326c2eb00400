//! Similarity scoring and greedy matching of mentors to mentees.
//!
//! This crate provides:
//! - `token_sort_ratio` and friends for comparing free-text attributes
//! - The `Scorer` trait and the default `TokenSortScorer`
//! - `Matcher`, which picks the best-scoring mentor for every mentee
//! - `ResultSink` implementations for persisting the pairing table
//!
//! ## Architecture
//! A pairing run is strictly sequential:
//! 1. Roster sources produce validated mentor and mentee rosters
//! 2. The matcher scores each (mentor, mentee) pair and keeps the best per mentee
//! 3. Sinks persist the finished table
//!
//! ## Example Usage
//! ```ignore
//! use matching::{run, CsvFileSink, Matcher, ResultSink};
//! use roster::source;
//!
//! let mentors = source::open("mentors.csv", None);
//! let mentees = source::open("mentees.csv", None);
//! let mut sinks: Vec<Box<dyn ResultSink>> = vec![Box::new(CsvFileSink::new("pairings.csv"))];
//!
//! let pairings = run(mentors.as_ref(), mentees.as_ref(), &Matcher::new(), &mut sinks)?;
//! ```

pub mod error;
pub mod matcher;
pub mod run;
pub mod scorer;
pub mod similarity;
pub mod sink;
pub mod traits;
pub mod types;

// Re-export main types
pub use error::{MatchError, Result};
pub use matcher::{is_better, Matcher};
pub use run::run;
pub use scorer::{score, AttributeScores, TokenSortScorer, MAX_SCORE};
pub use similarity::token_sort_ratio;
pub use sink::{CsvFileSink, JsonFileSink, MemorySink, ResultSink};
pub use traits::Scorer;
pub use types::{PairingResult, RankedMentor};
