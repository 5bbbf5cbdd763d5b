//! Fuzzy matching of spoken answers against the expected text.
//!
//! Exact match counts as similarity 1.0; containment either way is accepted
//! at 0.8; otherwise the answer is scored by normalized Levenshtein edit
//! distance and accepted above 0.7.

/// Acceptance threshold for the edit-distance similarity.
const SIMILARITY_CUTOFF: f64 = 0.7;

/// Outcome of matching a spoken answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatch {
    pub is_correct: bool,
    pub similarity: f64,
}

/// Match a spoken answer against the expected one.
///
/// Both inputs are trimmed and case-folded before comparison, so
/// "АБЫЛАЙ ХАН" matches "абылай хан".
pub fn match_spoken(spoken: &str, expected: &str) -> FuzzyMatch {
    let spoken = spoken.trim().to_lowercase();
    let expected = expected.trim().to_lowercase();

    if expected.is_empty() {
        return FuzzyMatch { is_correct: false, similarity: 0.0 };
    }

    if spoken == expected {
        return FuzzyMatch { is_correct: true, similarity: 1.0 };
    }

    if !spoken.is_empty() && (spoken.contains(&expected) || expected.contains(&spoken)) {
        return FuzzyMatch { is_correct: true, similarity: 0.8 };
    }

    let similarity = similarity(&spoken, &expected);
    FuzzyMatch {
        is_correct: similarity > SIMILARITY_CUTOFF,
        similarity,
    }
}

/// Normalized edit-distance similarity in `0.0..=1.0`.
///
/// Distance is measured in chars, not bytes, so Cyrillic and Latin inputs
/// are weighted the same.
fn similarity(a: &str, b: &str) -> f64 {
    let (longer, shorter) = if a.chars().count() >= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let longer_len = longer.chars().count();
    if longer_len == 0 {
        return 1.0;
    }
    let distance = strsim::levenshtein(longer, shorter);
    (longer_len - distance.min(longer_len)) as f64 / longer_len as f64
}
