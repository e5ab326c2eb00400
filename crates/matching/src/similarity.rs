//! Token-sort string similarity.
//!
//! Two free-text values are compared after lower-casing, stripping
//! punctuation and sorting their words, so "ML, AI" and "ai ml" are the same
//! value. The closeness of the resulting strings is an edit-distance ratio in
//! `[0, 100]`.

/// Lower-case, turn every non-word character into a space, trim.
///
/// Word characters are alphanumerics and `_`.
pub fn preprocess(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

/// Preprocess, split on whitespace, sort tokens and rejoin with single spaces
pub fn sorted_tokens(value: &str) -> String {
    let processed = preprocess(value);
    let mut tokens: Vec<&str> = processed.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Edit distance where insertions and deletions cost 1 and substitutions 2.
///
/// Equal to `len(a) + len(b) - 2 * LCS(a, b)`. Works on chars, not bytes.
pub fn indel_distance(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return a.len() + b.len();
    }

    // Single-row LCS table, `prev_diag` holds the value up-left of `row[j]`
    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        let mut prev_diag = 0;
        for (j, &cb) in b.iter().enumerate() {
            let up = row[j + 1];
            row[j + 1] = if ca == cb {
                prev_diag + 1
            } else {
                up.max(row[j])
            };
            prev_diag = up;
        }
    }

    a.len() + b.len() - 2 * row[b.len()]
}

/// Similarity of two already-normalized strings, `[0, 100]`.
///
/// ## Algorithm
/// - both empty: 100
/// - exactly one empty: 0
/// - otherwise `100 * (total - distance) / total`, rounded half to even,
///   where `total` is the combined length in chars
pub fn ratio(a: &str, b: &str) -> u32 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    match (a.is_empty(), b.is_empty()) {
        (true, true) => return 100,
        (true, false) | (false, true) => return 0,
        _ => {}
    }

    let total = a.len() + b.len();
    let matched = total - indel_distance(&a, &b);
    round_half_even(100 * matched, total)
}

/// `numerator / denominator` rounded to the nearest integer, ties to even
fn round_half_even(numerator: usize, denominator: usize) -> u32 {
    let quotient = numerator / denominator;
    let twice_rem = 2 * (numerator % denominator);
    let round_up = twice_rem > denominator || (twice_rem == denominator && quotient % 2 == 1);
    (quotient + usize::from(round_up)) as u32
}

/// Word-order and case insensitive ratio between two raw attribute values
pub fn token_sort_ratio(a: &str, b: &str) -> u32 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}
