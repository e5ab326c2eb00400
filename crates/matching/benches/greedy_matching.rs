//! Benchmarks for scoring and greedy matching
//!
//! Run with: cargo bench --package matching
//!
//! Uses a synthetic roster so no data files are needed.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use matching::{score, Matcher};
use roster::PersonRecord;

const MAJORS: [&str; 4] = ["Computer Science", "Mathematics", "Electrical Engineering", "Biology"];
const TOPICS: [&str; 4] = ["AI, ML", "Systems, Networking", "Security", "HCI, Graphics"];
const HOBBIES: [&str; 4] = ["chess", "hiking, climbing", "piano", "board games"];

fn synthetic_roster(prefix: &str, size: usize) -> Vec<PersonRecord> {
    (0..size)
        .map(|i| {
            PersonRecord::new(
                format!("{prefix} {i}"),
                MAJORS[i % MAJORS.len()],
                TOPICS[(i / 2) % TOPICS.len()],
                HOBBIES[(i / 3) % HOBBIES.len()],
            )
            .with_activities(if i % 5 == 0 { "hackathons" } else { "" })
        })
        .collect()
}

fn bench_score_pair(c: &mut Criterion) {
    let mentors = synthetic_roster("Mentor", 2);
    c.bench_function("score_pair", |b| {
        b.iter(|| score(black_box(&mentors[0]), black_box(&mentors[1])))
    });
}

fn bench_pair_parallel(c: &mut Criterion) {
    let mentors = synthetic_roster("Mentor", 100);
    let mentees = synthetic_roster("Mentee", 300);
    let matcher = Matcher::new();

    c.bench_function("pair_100x300_parallel", |b| {
        b.iter(|| black_box(matcher.pair_people(black_box(&mentors), black_box(&mentees))))
    });
}

fn bench_pair_sequential(c: &mut Criterion) {
    let mentors = synthetic_roster("Mentor", 100);
    let mentees = synthetic_roster("Mentee", 300);
    let matcher = Matcher::new().sequential();

    c.bench_function("pair_100x300_sequential", |b| {
        b.iter(|| black_box(matcher.pair_people(black_box(&mentors), black_box(&mentees))))
    });
}

criterion_group!(benches, bench_score_pair, bench_pair_parallel, bench_pair_sequential);
criterion_main!(benches);
