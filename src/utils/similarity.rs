//! Text difference scoring for fork comparison.
//!
//! Two strings are normalized and split into word tokens, then compared on
//! two axes:
//! - token overlap: Jaccard index over the token sets, insensitive to order;
//! - sequence ratio: `2·M / (|a| + |b|)` where `M` is the number of tokens in
//!   the common subsequence. Appended or dropped content lowers this even
//!   when every original word survives, which is the length penalty.
//!
//! The blended similarity is turned into a 0-100 difference percentage.
//!
//! The sequence term is the only superlinear step, so it only looks at the
//! leading `MAX_SEQUENCE_TOKENS` of each side and runs under a deadline.
//! Token overlap always covers the full text.

use std::collections::HashSet;
use std::time::{Duration, Instant};
use similar::{capture_diff_slices_deadline, get_diff_ratio, Algorithm};

const OVERLAP_WEIGHT: f64 = 0.6;
const SEQUENCE_WEIGHT: f64 = 0.4;

/// Longest token prefix fed to the ordered diff.
pub const MAX_SEQUENCE_TOKENS: usize = 2_000;
const SEQUENCE_DEADLINE: Duration = Duration::from_millis(200);

/// Lowercase, drop apostrophes, turn other punctuation into spaces and
/// collapse whitespace, so "Can't  track!" and "cant track" compare equal.
pub fn normalize(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '\'' || ch == '\u{2019}' {
            continue;
        }
        if ch.is_alphanumeric() {
            normalized.extend(ch.to_lowercase());
        } else {
            normalized.push(' ');
        }
    }
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Jaccard index of two token lists, treated as sets.
pub fn token_overlap(a: &[String], b: &[String]) -> f64 {
    let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();

    if set_a.is_empty() && set_b.is_empty() {
        return 1.0;
    }

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();
    intersection as f64 / union as f64
}

/// Share of tokens that line up in order between the two sequences.
///
/// Inputs longer than `MAX_SEQUENCE_TOKENS` are compared on their prefixes.
/// Past the deadline the diff falls back to a coarser match, which can only
/// lower the ratio.
pub fn sequence_ratio(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let a = &a[..a.len().min(MAX_SEQUENCE_TOKENS)];
    let b = &b[..b.len().min(MAX_SEQUENCE_TOKENS)];
    let deadline = Instant::now() + SEQUENCE_DEADLINE;
    let ops = capture_diff_slices_deadline(Algorithm::Myers, a, b, Some(deadline));
    f64::from(get_diff_ratio(&ops, a.len(), b.len()))
}

/// Similarity in `[0, 1]`; 1 means identical after normalization.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let tokens_a = tokenize(a);
    let tokens_b = tokenize(b);

    match (tokens_a.is_empty(), tokens_b.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }

    let overlap = token_overlap(&tokens_a, &tokens_b);
    let sequence = sequence_ratio(&tokens_a, &tokens_b);
    (OVERLAP_WEIGHT * overlap + SEQUENCE_WEIGHT * sequence).clamp(0.0, 1.0)
}

/// How different `candidate` is from `original`, as a percentage in `0..=100`.
///
/// Identical text (ignoring case, whitespace and punctuation) scores 0; text
/// sharing no words scores 100, as does any comparison where exactly one
/// side is empty.
pub fn compute_field_difference(original: &str, candidate: &str) -> u8 {
    let similarity = similarity_ratio(original, candidate);
    let difference = 100.0 - (similarity * 100.0).round();
    difference.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_collapses_case_and_punctuation() {
        assert_eq!(normalize("  Small Businesses CAN'T   track!  "), "small businesses cant track");
        assert_eq!(normalize("carbon-emissions/2024"), "carbon emissions 2024");
        assert_eq!(normalize("It\u{2019}s"), "its");
    }

    #[test]
    fn test_identical_text_is_zero() {
        let s = "Small businesses can't track carbon emissions";
        assert_eq!(compute_field_difference(s, s), 0);
    }

    #[test]
    fn test_empty_vs_empty_is_zero() {
        assert_eq!(compute_field_difference("", ""), 0);
        assert_eq!(compute_field_difference("   ", "\n\t"), 0);
    }

    #[test]
    fn test_whitespace_and_case_insensitive() {
        assert_eq!(compute_field_difference("Hello   World", "hello world"), 0);
        assert_eq!(compute_field_difference("the quick brown fox", "the quick brown fox!"), 0);
    }

    #[test]
    fn test_one_side_empty_is_hundred() {
        assert_eq!(compute_field_difference("carbon tracking for cafes", ""), 100);
        assert_eq!(compute_field_difference("", "carbon tracking for cafes"), 100);
    }

    #[test]
    fn test_unrelated_text_is_hundred() {
        assert_eq!(
            compute_field_difference("the quick brown fox", "pack my box with five dozen liquor jugs"),
            100
        );
    }

    #[test]
    fn test_more_added_content_scores_higher() {
        let base = "the quick brown fox";
        let punctuated = compute_field_difference(base, "the quick brown fox!");
        let extended = compute_field_difference(base, "the quick brown fox jumps over the lazy dog");
        let unrelated = compute_field_difference(base, "pack my box with five dozen liquor jugs");

        assert!(extended > punctuated);
        assert!(punctuated < unrelated);
        assert!(extended < unrelated);
        // overlap 4/8, sequence 8/13
        assert_eq!(extended, 45);
    }

    #[test]
    fn test_reordering_counts_as_some_difference() {
        let diff = compute_field_difference("a b c d", "d c b a");
        assert!(diff > 0);
        assert!(diff < 50);
    }

    #[test]
    fn test_single_word_swap_is_small() {
        let diff = compute_field_difference(
            "Most small businesses have no affordable way to measure the carbon footprint of their daily operations.",
            "Most small businesses have no cheap way to measure the carbon footprint of their daily operations.",
        );
        assert!(diff > 0);
        assert!(diff < 20);
    }

    #[test]
    fn test_token_overlap_sets() {
        let a = tokenize("the cat the hat");
        let b = tokenize("the hat");
        assert!((token_overlap(&a, &b) - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_sequence_ratio_identical() {
        let a = tokenize("one two three");
        assert!((sequence_ratio(&a, &a) - 1.0).abs() < 1e-6);
    }

    fn numbered_words(prefix: &str, count: usize) -> String {
        (0..count).map(|i| format!("{}{}", prefix, i)).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_long_unrelated_text_scores_quickly() {
        let original = numbered_words("alpha", 40_000);
        let candidate = numbered_words("beta", 40_000);

        let started = Instant::now();
        let diff = compute_field_difference(&original, &candidate);
        let elapsed = started.elapsed();

        assert_eq!(diff, 100);
        assert!(elapsed < Duration::from_secs(5), "scoring took {:?}", elapsed);
    }

    #[test]
    fn test_long_identical_text_is_zero() {
        let text = numbered_words("word", 10_000);
        assert_eq!(compute_field_difference(&text, &text), 0);
    }

    #[test]
    fn test_sequence_ratio_uses_prefix_of_long_input() {
        let a: Vec<String> = tokenize(&numbered_words("w", MAX_SEQUENCE_TOKENS + 500));
        let mut b = a.clone();
        b.truncate(MAX_SEQUENCE_TOKENS);
        assert!((sequence_ratio(&a, &b) - 1.0).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_difference_is_bounded(a in ".{0,80}", b in ".{0,80}") {
            let diff = compute_field_difference(&a, &b);
            prop_assert!(diff <= 100);
        }

        #[test]
        fn prop_identity_is_zero(s in "[a-zA-Z ,.!]{0,80}") {
            prop_assert_eq!(compute_field_difference(&s, &s), 0);
        }

        #[test]
        fn prop_overlap_is_symmetric(a in "[a-d ]{0,40}", b in "[a-d ]{0,40}") {
            let ta = tokenize(&a);
            let tb = tokenize(&b);
            prop_assert!((token_overlap(&ta, &tb) - token_overlap(&tb, &ta)).abs() < 1e-12);
        }
    }
}
