//! Greedy mentor selection.
//!
//! Every mentee is handled independently: all mentors are scored against
//! them and the best one wins. There is no exclusivity, so one mentor can be
//! picked for many mentees, and no attempt at a globally optimal assignment.
//!
//! ## Tie-break
//! A mentor only replaces the current best when its score is strictly
//! greater. On equal scores the mentor earlier in the roster stays. The
//! starting best is `(None, 0)`, so a mentee whose every mentor scores zero
//! ends up unmatched.

use crate::error::Result;
use crate::scorer::TokenSortScorer;
use crate::traits::Scorer;
use crate::types::{PairingResult, RankedMentor};
use rayon::prelude::*;
use roster::{PersonRecord, RawRecord, Role, Roster};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Tie-break rule for the running best: strictly greater only
#[inline]
pub fn is_better(candidate: u32, best: u32) -> bool {
    candidate > best
}

/// Scores every mentor against each mentee and keeps the best.
///
/// ## Usage
/// ```ignore
/// let pairings = Matcher::new().pair(&mentors, &mentees);
/// ```
///
/// ## Performance Note
/// By default the outer loop runs on rayon's thread pool. Indexed
/// `collect` keeps mentee order, and each mentee's reduction is a sequential
/// fold over mentor indices, so the output is identical to `sequential()`.
#[derive(Debug, Clone)]
pub struct Matcher<S = TokenSortScorer> {
    scorer: S,
    parallel: bool,
}

impl Matcher<TokenSortScorer> {
    /// Matcher with the default token-sort scorer
    pub fn new() -> Self {
        Self::with_scorer(TokenSortScorer)
    }
}

impl Default for Matcher<TokenSortScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Scorer> Matcher<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self {
            scorer,
            parallel: true,
        }
    }

    /// Toggle the parallel outer loop (builder pattern)
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Run everything on the calling thread
    pub fn sequential(self) -> Self {
        self.parallel(false)
    }

    /// Pick the best mentor for one mentee.
    ///
    /// ## Algorithm
    /// Fold over `mentors` in order from `(None, 0)`, replacing the running
    /// best only when `is_better` holds.
    ///
    /// # Returns
    /// The winning mentor (if any) and its score
    pub fn best_mentor<'a>(
        &self,
        mentors: &'a [PersonRecord],
        mentee: &PersonRecord,
    ) -> (Option<&'a PersonRecord>, u32) {
        mentors
            .iter()
            .fold((None, 0), |(best, best_score), mentor| {
                let score = self.scorer.score(mentor, mentee);
                if is_better(score, best_score) {
                    (Some(mentor), score)
                } else {
                    (best, best_score)
                }
            })
    }

    fn pair_one(&self, mentors: &[PersonRecord], mentee: &PersonRecord) -> PairingResult {
        let (best, score) = self.best_mentor(mentors, mentee);
        match best {
            Some(mentor) => debug!(
                "Mentee '{}' -> mentor '{}' (score {})",
                mentee.full_name, mentor.full_name, score
            ),
            None if !mentors.is_empty() => warn!(
                "Mentee '{}' has no mentor with a positive score",
                mentee.full_name
            ),
            None => {}
        }
        PairingResult::new(
            mentee.full_name.clone(),
            best.map(|m| m.full_name.clone()),
            score,
        )
    }

    /// Match every mentee against the mentor roster.
    ///
    /// # Arguments
    /// * `mentors` - Candidate mentors, in roster order
    /// * `mentees` - Mentees to match, in roster order
    ///
    /// # Returns
    /// Exactly one `PairingResult` per mentee, in mentee order
    pub fn pair_people(
        &self,
        mentors: &[PersonRecord],
        mentees: &[PersonRecord],
    ) -> Vec<PairingResult> {
        let start = Instant::now();

        let results: Vec<PairingResult> = if self.parallel {
            mentees
                .par_iter()
                .map(|mentee| self.pair_one(mentors, mentee))
                .collect()
        } else {
            mentees
                .iter()
                .map(|mentee| self.pair_one(mentors, mentee))
                .collect()
        };

        info!(
            "Matched {} mentees against {} mentors with {} in {:?}",
            results.len(),
            mentors.len(),
            self.scorer.name(),
            start.elapsed()
        );
        results
    }

    /// Match two validated rosters
    pub fn pair(&self, mentors: &Roster, mentees: &Roster) -> Vec<PairingResult> {
        self.pair_people(mentors.people(), mentees.people())
    }

    /// Validate raw rows and match them.
    ///
    /// Both rosters are converted before any scoring happens, so a
    /// `MissingField` aborts the whole pass and nothing is returned.
    pub fn pair_records(
        &self,
        mentors: &[RawRecord],
        mentees: &[RawRecord],
    ) -> Result<Vec<PairingResult>> {
        let mentors = Roster::from_raw(Role::Mentor, mentors)?;
        let mentees = Roster::from_raw(Role::Mentee, mentees)?;
        Ok(self.pair(&mentors, &mentees))
    }

    /// Every mentor's breakdown for one mentee, best first.
    ///
    /// The sort is stable on roster index, so the head of this list is the
    /// mentor `best_mentor` picks whenever its score is positive.
    pub fn rank(&self, mentors: &[PersonRecord], mentee: &PersonRecord) -> Vec<RankedMentor> {
        let mut ranked: Vec<RankedMentor> = mentors
            .iter()
            .enumerate()
            .map(|(index, mentor)| RankedMentor {
                index,
                mentor: mentor.full_name.clone(),
                breakdown: self.scorer.breakdown(mentor, mentee),
            })
            .collect();
        ranked.sort_by(|a, b| b.score().cmp(&a.score()).then(a.index.cmp(&b.index)));
        ranked
    }
}
