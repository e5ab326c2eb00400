//! # Roster Crate
//!
//! This crate turns mentor and mentee rosters into typed records.
//!
//! ## Main Components
//!
//! - **types**: `RawRecord`, `PersonRecord`, `Roster`, `Role` and the field names
//! - **parser**: Parse delimited text and JSON arrays into raw records
//! - **source**: The `RosterSource` trait and file-backed implementations
//! - **error**: Error types for roster loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use roster::{source, Role, RosterSource};
//!
//! let mentors = source::open("mentors.csv", None).fetch(Role::Mentor)?;
//! let mentees = source::open("mentees.json", None).fetch(Role::Mentee)?;
//!
//! println!("{} mentors, {} mentees", mentors.len(), mentees.len());
//! ```
//!
//! Field names are case-sensitive and must match exactly after trimming:
//! `Full Name`, `major`, `CStopics`, `Hobbies`, and optionally `Activities`.

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod source;

// Re-export commonly used types for convenience
pub use error::{Result, RosterError};
pub use source::{DelimitedFileSource, InMemorySource, InputFormat, JsonRecordsSource, RosterSource};
pub use types::{
    PersonRecord,
    RawRecord,
    Role,
    Roster,
    // Field names
    ACTIVITIES,
    CS_TOPICS,
    FULL_NAME,
    HOBBIES,
    MAJOR,
};
