//! End-to-end pairing run: sources in, sinks out.
//!
//! 1. Fetch and validate the mentor roster
//! 2. Fetch and validate the mentee roster
//! 3. Match
//! 4. Hand the complete table to every sink, in order
//!
//! Any roster error stops the run before step 3, so sinks never receive a
//! partial table.

use crate::error::Result;
use crate::matcher::Matcher;
use crate::sink::ResultSink;
use crate::traits::Scorer;
use crate::types::PairingResult;
use roster::{Role, RosterSource};
use tracing::{debug, info};

/// Run one pairing pass.
///
/// # Arguments
/// * `mentors` - Source of the mentor roster
/// * `mentees` - Source of the mentee roster
/// * `matcher` - Configured matcher
/// * `sinks` - Destinations for the finished table
///
/// # Returns
/// The pairing table that was written
pub fn run<S: Scorer>(
    mentors: &dyn RosterSource,
    mentees: &dyn RosterSource,
    matcher: &Matcher<S>,
    sinks: &mut [Box<dyn ResultSink>],
) -> Result<Vec<PairingResult>> {
    let mentor_roster = mentors.fetch(Role::Mentor)?;
    let mentee_roster = mentees.fetch(Role::Mentee)?;

    let results = matcher.pair(&mentor_roster, &mentee_roster);

    for sink in sinks.iter_mut() {
        debug!("Writing {} pairings to {}", results.len(), sink.describe());
        sink.write(&results)?;
    }

    let matched = results.iter().filter(|r| r.is_matched()).count();
    info!(
        "Pairing run complete: {}/{} mentees matched, {} sinks written",
        matched,
        results.len(),
        sinks.len()
    );
    Ok(results)
}
