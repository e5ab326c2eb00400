//! Similarity scoring between a mentor and a mentee.
//!
//! The score is the sum of four token-sort ratios, one per compared
//! attribute, so it always lies in `[0, 400]`.

use crate::similarity::token_sort_ratio;
use crate::traits::Scorer;
use roster::PersonRecord;
use serde::Serialize;

/// Highest possible aggregate score
pub const MAX_SCORE: u32 = 400;

/// The four per-attribute ratios behind an aggregate score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AttributeScores {
    pub major: u32,
    pub cs_topics: u32,
    pub hobbies: u32,
    pub activities: u32,
}

impl AttributeScores {
    pub fn total(&self) -> u32 {
        self.major + self.cs_topics + self.hobbies + self.activities
    }

    /// `(field name, ratio)` pairs, in comparison order
    pub fn entries(&self) -> [(&'static str, u32); 4] {
        [
            (roster::MAJOR, self.major),
            (roster::CS_TOPICS, self.cs_topics),
            (roster::HOBBIES, self.hobbies),
            (roster::ACTIVITIES, self.activities),
        ]
    }
}

/// Default scorer: token-sort ratio on `major`, `CStopics`, `Hobbies` and
/// `Activities`, equally weighted
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenSortScorer;

impl Scorer for TokenSortScorer {
    fn name(&self) -> &str {
        "TokenSortScorer"
    }

    fn breakdown(&self, mentor: &PersonRecord, mentee: &PersonRecord) -> AttributeScores {
        AttributeScores {
            major: token_sort_ratio(&mentor.major, &mentee.major),
            cs_topics: token_sort_ratio(&mentor.cs_topics, &mentee.cs_topics),
            hobbies: token_sort_ratio(&mentor.hobbies, &mentee.hobbies),
            activities: token_sort_ratio(&mentor.activities, &mentee.activities),
        }
    }
}

/// Score one pair with the default scorer
pub fn score(mentor: &PersonRecord, mentee: &PersonRecord) -> u32 {
    TokenSortScorer.score(mentor, mentee)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> PersonRecord {
        PersonRecord::new("Alice", "Computer Science", "AI, ML", "chess")
    }

    fn bob() -> PersonRecord {
        PersonRecord::new("Bob", "computer science", "ML, AI", "chess")
    }

    #[test]
    fn test_alice_bob_perfect_match() {
        let breakdown = TokenSortScorer.breakdown(&alice(), &bob());
        assert_eq!(
            breakdown,
            AttributeScores {
                major: 100,
                cs_topics: 100,
                hobbies: 100,
                activities: 100,
            }
        );
        assert_eq!(score(&alice(), &bob()), MAX_SCORE);
    }

    #[test]
    fn test_self_match_is_max() {
        let person = alice().with_activities("robotics");
        assert_eq!(score(&person, &person), MAX_SCORE);
    }

    #[test]
    fn test_one_sided_activities_scores_zero_for_that_field() {
        let mentor = alice().with_activities("robotics");
        let breakdown = TokenSortScorer.breakdown(&mentor, &bob());
        assert_eq!(breakdown.activities, 0);
        assert_eq!(breakdown.total(), 300);
    }

    #[test]
    fn test_unrelated_people_score_low() {
        let mentor = PersonRecord::new("M", "Biology", "databases", "surfing");
        let mentee = PersonRecord::new("E", "Art", "compilers", "knitting")
            .with_activities("choir");
        let total = score(&mentor, &mentee);
        assert!(total < 200, "got {total}");
    }

    #[test]
    fn test_entries_order() {
        let names: Vec<_> = AttributeScores::default()
            .entries()
            .iter()
            .map(|(n, _)| *n)
            .collect();
        assert_eq!(names, vec!["major", "CStopics", "Hobbies", "Activities"]);
    }
}
