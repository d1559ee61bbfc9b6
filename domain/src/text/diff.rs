//! Word-level diff between reference and transcription tokens.

use serde::{Deserialize, Serialize};

use crate::text::matching::matching_blocks;

/// Classification of one token relative to the alignment between the
/// reference (sequence A) and the transcription (sequence B).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "token", rename_all = "lowercase")]
pub enum DiffEntry {
    /// Present in both sequences at aligned positions.
    Common(String),
    /// Present in the reference, absent from the transcription.
    Missing(String),
    /// Present in the transcription, absent from the reference.
    Extra(String),
}

impl DiffEntry {
    pub fn token(&self) -> &str {
        match self {
            DiffEntry::Common(t) | DiffEntry::Missing(t) | DiffEntry::Extra(t) => t,
        }
    }
}

/// Splits both normalized texts on whitespace and walks the matching
/// blocks over the token sequences. Each gap between blocks emits the
/// reference's unmatched tokens as `Missing`, then the transcription's
/// as `Extra`, preserving original token order throughout.
pub fn diff_tokens(reference: &str, transcription: &str) -> Vec<DiffEntry> {
    let ref_tokens: Vec<&str> = reference.split_whitespace().collect();
    let trans_tokens: Vec<&str> = transcription.split_whitespace().collect();

    let mut entries = Vec::with_capacity(ref_tokens.len() + trans_tokens.len());
    let mut ref_cursor = 0;
    let mut trans_cursor = 0;

    for block in matching_blocks(&ref_tokens, &trans_tokens) {
        push_gap(
            &mut entries,
            &ref_tokens[ref_cursor..block.a_start],
            &trans_tokens[trans_cursor..block.b_start],
        );
        for token in &ref_tokens[block.a_start..block.a_start + block.len] {
            entries.push(DiffEntry::Common(token.to_string()));
        }
        ref_cursor = block.a_start + block.len;
        trans_cursor = block.b_start + block.len;
    }
    push_gap(
        &mut entries,
        &ref_tokens[ref_cursor..],
        &trans_tokens[trans_cursor..],
    );

    entries
}

fn push_gap(entries: &mut Vec<DiffEntry>, missing: &[&str], extra: &[&str]) {
    for token in missing {
        entries.push(DiffEntry::Missing(token.to_string()));
    }
    for token in extra {
        entries.push(DiffEntry::Extra(token.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(entries: &[DiffEntry]) -> (usize, usize, usize) {
        let common = entries
            .iter()
            .filter(|e| matches!(e, DiffEntry::Common(_)))
            .count();
        let missing = entries
            .iter()
            .filter(|e| matches!(e, DiffEntry::Missing(_)))
            .count();
        let extra = entries
            .iter()
            .filter(|e| matches!(e, DiffEntry::Extra(_)))
            .count();
        (common, missing, extra)
    }

    #[test]
    fn identical_texts_are_all_common() {
        let entries = diff_tokens("محمود والد زيد", "محمود والد زيد");
        assert_eq!(counts(&entries), (3, 0, 0));
    }

    #[test]
    fn truncated_reading_marks_tail_missing() {
        let entries = diff_tokens("محمود والد زيد وهو يعمل", "محمود والد");
        assert_eq!(counts(&entries), (2, 3, 0));
        assert_eq!(
            entries,
            vec![
                DiffEntry::Common("محمود".into()),
                DiffEntry::Common("والد".into()),
                DiffEntry::Missing("زيد".into()),
                DiffEntry::Missing("وهو".into()),
                DiffEntry::Missing("يعمل".into()),
            ]
        );
    }

    #[test]
    fn substitution_emits_missing_then_extra() {
        let entries = diff_tokens("a b c", "a x c");
        assert_eq!(
            entries,
            vec![
                DiffEntry::Common("a".into()),
                DiffEntry::Missing("b".into()),
                DiffEntry::Extra("x".into()),
                DiffEntry::Common("c".into()),
            ]
        );
    }

    #[test]
    fn empty_inputs_yield_empty_or_one_sided_diffs() {
        assert!(diff_tokens("", "").is_empty());
        let entries = diff_tokens("a b", "");
        assert_eq!(counts(&entries), (0, 2, 0));
        let entries = diff_tokens("", "a b");
        assert_eq!(counts(&entries), (0, 0, 2));
    }

    #[test]
    fn counts_conserve_token_totals() {
        let cases = [
            ("محمود والد زيد وهو يعمل", "محمود والد"),
            ("a b c d", "b c x y"),
            ("one two", "one two three"),
        ];
        for (reference, transcription) in cases {
            let entries = diff_tokens(reference, transcription);
            let (common, missing, extra) = counts(&entries);
            assert_eq!(
                common + missing,
                reference.split_whitespace().count(),
                "reference side for {reference:?}"
            );
            assert_eq!(
                common + extra,
                transcription.split_whitespace().count(),
                "transcription side for {transcription:?}"
            );
        }
    }
}
