//! Loading rosters from files on disk.

use roster::{source, DelimitedFileSource, InputFormat, Role, RosterError, RosterSource};
use std::fs;

#[test]
fn test_csv_with_bom_and_padded_headers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mentors.csv");
    fs::write(
        &path,
        "\u{feff} Full Name ,major, CStopics ,Hobbies\r\nAlice,Computer Science,\"AI, ML\",chess\r\n",
    )
    .unwrap();

    let roster = source::open(&path, None).fetch(Role::Mentor).unwrap();
    assert_eq!(roster.len(), 1);
    let alice = &roster.people()[0];
    assert_eq!(alice.full_name, "Alice");
    assert_eq!(alice.cs_topics, "AI, ML");
    assert_eq!(alice.activities, "");
}

#[test]
fn test_tsv_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mentees.tsv");
    fs::write(
        &path,
        "Full Name\tmajor\tCStopics\tHobbies\tActivities\nBob\tMath\tCrypto, AI\tgo\tdebate\n",
    )
    .unwrap();

    let roster = source::open(&path, None).fetch(Role::Mentee).unwrap();
    assert_eq!(roster.people()[0].cs_topics, "Crypto, AI");
    assert_eq!(roster.people()[0].activities, "debate");
}

#[test]
fn test_forced_format_overrides_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.txt");
    fs::write(
        &path,
        r#"[{"Full Name": "Cy", "major": "Art", "CStopics": "HCI", "Hobbies": "paint"}]"#,
    )
    .unwrap();

    let roster = source::open(&path, Some(InputFormat::Json))
        .fetch(Role::Mentee)
        .unwrap();
    assert_eq!(roster.people()[0].full_name, "Cy");
}

#[test]
fn test_missing_column_fails_whole_roster() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mentors.csv");
    fs::write(&path, "Full Name,major,CStopics\nAlice,CS,AI\nBea,Math,Crypto\n").unwrap();

    let err = DelimitedFileSource::new(&path).fetch(Role::Mentor).unwrap_err();
    assert_eq!(
        err.to_string(),
        "mentor record 'Alice' is missing required field 'Hobbies'"
    );
}

#[test]
fn test_ragged_row_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mentors.csv");
    fs::write(&path, "Full Name,major,CStopics,Hobbies\nAlice,CS,AI\n").unwrap();

    let err = DelimitedFileSource::new(&path).fetch(Role::Mentor).unwrap_err();
    assert!(matches!(
        err,
        RosterError::FieldCountMismatch { expected: 4, found: 3, line: 2 }
    ));
}
