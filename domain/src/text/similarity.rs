//! Character-level similarity between two normalized strings.

use crate::text::matching::matching_blocks;

/// Ratio of matched characters to total characters, `2 * M / T`, scaled
/// to a percentage. Character-level on purpose: partially correct words
/// still earn credit even when the word-level diff rejects them.
///
/// Two empty strings are defined as fully similar. No rounding happens
/// here; presentation layers round.
pub fn similarity(a: &str, b: &str) -> f64 {
    let left: Vec<char> = a.chars().collect();
    let right: Vec<char> = b.chars().collect();

    let total = left.len() + right.len();
    if total == 0 {
        return 100.0;
    }

    let matched: usize = matching_blocks(&left, &right)
        .iter()
        .map(|block| block.len)
        .sum();

    2.0 * matched as f64 / total as f64 * 100.0
}
