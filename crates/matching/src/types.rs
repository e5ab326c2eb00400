//! Output types of a matching pass.

use serde::{Deserialize, Serialize};

/// One mentee and the mentor chosen for them.
///
/// Created once per mentee during a pass and never modified afterwards.
/// Serializes with the column names used for persisted pairing tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingResult {
    #[serde(rename = "Mentee")]
    pub mentee: String,
    /// `None` only when no mentor scored above zero, e.g. an empty roster
    #[serde(rename = "Mentor")]
    pub mentor: Option<String>,
    #[serde(rename = "Score")]
    pub score: u32,
}

impl PairingResult {
    pub fn new(mentee: impl Into<String>, mentor: Option<String>, score: u32) -> Self {
        Self {
            mentee: mentee.into(),
            mentor,
            score,
        }
    }

    pub fn is_matched(&self) -> bool {
        self.mentor.is_some()
    }
}

/// A mentor's standing for one mentee, used when explaining a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedMentor {
    /// Position of the mentor in the mentor roster
    pub index: usize,
    pub mentor: String,
    pub breakdown: crate::scorer::AttributeScores,
}

impl RankedMentor {
    pub fn score(&self) -> u32 {
        self.breakdown.total()
    }
}
