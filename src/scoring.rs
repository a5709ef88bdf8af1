//! Sentence similarity scoring for retelling submissions.
//!
//! Grades a learner's typed sentence against the reference sentence it is
//! supposed to reproduce. The grade is a normalized Levenshtein similarity
//! percentage plus a pass/fail verdict against a fixed threshold.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Pass threshold
// ---------------------------------------------------------------------------

/// Minimum similarity percentage for a submission to count as a match.
///
/// Fixed product behavior, not configuration.
pub const PASS_THRESHOLD: f64 = 70.0;

// ---------------------------------------------------------------------------
// ComparisonResult
// ---------------------------------------------------------------------------

/// Outcome of grading one submission against its reference sentence.
///
/// Computed fresh per call and returned to the caller; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// Similarity between the normalized inputs, in [0.0, 100.0].
    pub similarity_percent: f64,
    /// Whether `similarity_percent` clears [`PASS_THRESHOLD`].
    pub passed: bool,
}

// ---------------------------------------------------------------------------
// score
// ---------------------------------------------------------------------------

/// Grade `submitted` against `reference`.
///
/// Both inputs are trimmed of leading/trailing whitespace and Unicode
/// lowercased before comparison, so capitalization and stray spacing never
/// cost the learner points. Diacritics are not folded; `mèo` and `meo` are
/// different words at the character level.
///
/// The similarity is `((max_len - distance) / max_len) * 100`, where
/// `distance` is the edit distance between the normalized strings and
/// `max_len` the longer normalized length in chars. Two empty strings are
/// identical, so the empty-vs-empty case scores 100 rather than dividing
/// by zero.
///
/// Deterministic and symmetric in its arguments. No side effects: each call
/// owns its working rows, so concurrent callers need no coordination.
pub fn score(submitted: &str, reference: &str) -> ComparisonResult {
    let submitted = submitted.trim().to_lowercase();
    let reference = reference.trim().to_lowercase();

    let submitted_len = submitted.chars().count();
    let reference_len = reference.chars().count();
    let max_len = submitted_len.max(reference_len);

    let similarity_percent = if max_len == 0 {
        100.0
    } else {
        let distance = edit_distance(&submitted, &reference);
        ((max_len - distance) as f64 / max_len as f64) * 100.0
    };

    ComparisonResult {
        similarity_percent,
        passed: similarity_percent >= PASS_THRESHOLD,
    }
}

// ---------------------------------------------------------------------------
// edit_distance
// ---------------------------------------------------------------------------

/// Levenshtein edit distance between `a` and `b`, measured in chars.
///
/// Minimum number of single-character insertions, deletions, and
/// substitutions required to transform one string into the other, all at
/// unit cost. The rolling two-row formulation fills the same
/// `(len(a)+1) x (len(b)+1)` grid as the textbook matrix while only keeping
/// two rows live.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    // previous[j] holds the distance from a[..i] to b[..j] for the row
    // above the one being filled. Row 0 is the distance from "" to b[..j].
    let mut previous: Vec<usize> = (0..=b_chars.len()).collect();
    let mut current = vec![0usize; b_chars.len() + 1];

    for (i, &a_char) in a_chars.iter().enumerate() {
        current[0] = i + 1;

        for (j, &b_char) in b_chars.iter().enumerate() {
            let substitution_cost = if a_char == b_char { 0 } else { 1 };

            current[j + 1] = (previous[j] + substitution_cost)
                .min(previous[j + 1] + 1)
                .min(current[j] + 1);
        }

        std::mem::swap(&mut previous, &mut current);
    }

    previous[b_chars.len()]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
