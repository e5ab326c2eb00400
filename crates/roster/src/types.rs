//! Core domain types for mentor and mentee rosters.
//!
//! Ingestion hands us loosely-typed rows (`RawRecord`); everything past this
//! module works with `PersonRecord`, whose required attributes are plain
//! `String` fields instead of string-keyed lookups.

use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Field Names
// =============================================================================
// These are literal contract keys. Casing is inconsistent on purpose
// (`major` vs `CStopics`) and must not be normalized.

/// Display identifier column
pub const FULL_NAME: &str = "Full Name";
/// Field of study
pub const MAJOR: &str = "major";
/// Computer science topic interests
pub const CS_TOPICS: &str = "CStopics";
/// Hobbies
pub const HOBBIES: &str = "Hobbies";
/// Optional activities; absent means empty string
pub const ACTIVITIES: &str = "Activities";

// =============================================================================
// Role
// =============================================================================

/// Which side of the pairing a roster describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Mentor,
    Mentee,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Mentor => write!(f, "mentor"),
            Role::Mentee => write!(f, "mentee"),
        }
    }
}

// =============================================================================
// Raw Records
// =============================================================================

/// One row as delivered by an ingestion source.
///
/// Fields keep their source order. Names are expected to be trimmed already;
/// both bundled sources do that before building a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: Vec<(String, String)>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a field. A repeated name overwrites the earlier value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Builder-style insert, handy in tests
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = RawRecord::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

// =============================================================================
// Person Records
// =============================================================================

/// A validated mentor or mentee.
///
/// Rust concept: once a `PersonRecord` exists, the scorer can read its
/// attributes without any `Option` handling. Missing data is rejected in
/// `from_raw`, not discovered halfway through a matching pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    #[serde(rename = "Full Name")]
    pub full_name: String,
    pub major: String,
    #[serde(rename = "CStopics")]
    pub cs_topics: String,
    #[serde(rename = "Hobbies")]
    pub hobbies: String,
    /// Empty when the source had no `Activities` value
    #[serde(rename = "Activities", default)]
    pub activities: String,
}

impl PersonRecord {
    /// Convenience constructor with no activities
    pub fn new(
        full_name: impl Into<String>,
        major: impl Into<String>,
        cs_topics: impl Into<String>,
        hobbies: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            major: major.into(),
            cs_topics: cs_topics.into(),
            hobbies: hobbies.into(),
            activities: String::new(),
        }
    }

    pub fn with_activities(mut self, activities: impl Into<String>) -> Self {
        self.activities = activities.into();
        self
    }

    /// Convert a raw row into a typed record.
    ///
    /// # Arguments
    /// * `role` - Which roster the row came from (for error messages)
    /// * `position` - Zero-based row index within its roster
    /// * `raw` - The row itself
    ///
    /// # Returns
    /// * `Err(RosterError::MissingField)` if `Full Name`, `major`, `CStopics`
    ///   or `Hobbies` is absent
    pub fn from_raw(role: Role, position: usize, raw: &RawRecord) -> Result<Self> {
        let label = raw
            .get(FULL_NAME)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} #{}", role, position + 1));

        let required = |field: &str| -> Result<String> {
            raw.get(field)
                .map(str::to_string)
                .ok_or_else(|| RosterError::MissingField {
                    role,
                    record: label.clone(),
                    field: field.to_string(),
                })
        };

        Ok(Self {
            full_name: required(FULL_NAME)?,
            major: required(MAJOR)?,
            cs_topics: required(CS_TOPICS)?,
            hobbies: required(HOBBIES)?,
            activities: raw.get(ACTIVITIES).unwrap_or_default().to_string(),
        })
    }
}

// =============================================================================
// Roster
// =============================================================================

/// Ordered collection of person records for one role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    role: Role,
    people: Vec<PersonRecord>,
}

impl Roster {
    pub fn new(role: Role, people: Vec<PersonRecord>) -> Self {
        Self { role, people }
    }

    /// Validate every raw row, failing on the first missing field.
    ///
    /// No partial roster is ever returned.
    pub fn from_raw(role: Role, rows: &[RawRecord]) -> Result<Self> {
        let people = rows
            .iter()
            .enumerate()
            .map(|(idx, raw)| PersonRecord::from_raw(role, idx, raw))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(role, people))
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Records in insertion order
    ///
    /// Rust concept: `&[T]` lets callers iterate without taking ownership
    pub fn people(&self) -> &[PersonRecord] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn find(&self, full_name: &str) -> Option<&PersonRecord> {
        self.people.iter().find(|p| p.full_name == full_name)
    }
}
