//! Core traits for the matching pipeline.
//!
//! The matcher is generic over a `Scorer`, so a different compatibility
//! measure can be dropped in without touching the greedy selection logic.

use crate::scorer::AttributeScores;
use roster::PersonRecord;

/// Computes a compatibility score between one mentor and one mentee.
///
/// ## Design Note
/// - `Send + Sync` lets the matcher share a scorer across rayon workers
/// - Implementations must be pure: same inputs, same score
pub trait Scorer: Send + Sync {
    /// Returns the name of this scorer (for logging/debugging)
    fn name(&self) -> &str;

    /// Per-attribute ratios behind a score
    fn breakdown(&self, mentor: &PersonRecord, mentee: &PersonRecord) -> AttributeScores;

    /// Aggregate score, the sum of the breakdown
    fn score(&self, mentor: &PersonRecord, mentee: &PersonRecord) -> u32 {
        self.breakdown(mentor, mentee).total()
    }
}
