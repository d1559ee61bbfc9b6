//! Assembles one comparison into an immutable report.

use serde::Serialize;

use crate::text::diff::{diff_tokens, DiffEntry};
use crate::text::normalize::normalize;
use crate::text::similarity::similarity;

/// Result of comparing one transcription against its reference text.
/// Built once per evaluation, never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub reference_text: String,
    pub normalized_reference: String,
    pub transcription: String,
    pub normalized_transcription: String,
    /// Unrounded; callers round for presentation.
    pub similarity_percentage: f64,
    pub common_count: usize,
    pub missing_count: usize,
    pub extra_count: usize,
    pub entries: Vec<DiffEntry>,
}

impl ComparisonReport {
    pub fn build(reference: &str, transcription: &str, strip_diacritics: bool) -> Self {
        let normalized_reference = normalize(reference, strip_diacritics);
        let normalized_transcription = normalize(transcription, strip_diacritics);

        let similarity_percentage = similarity(&normalized_reference, &normalized_transcription);
        let entries = diff_tokens(&normalized_reference, &normalized_transcription);

        let common_count = entries
            .iter()
            .filter(|e| matches!(e, DiffEntry::Common(_)))
            .count();
        let missing_count = entries
            .iter()
            .filter(|e| matches!(e, DiffEntry::Missing(_)))
            .count();
        let extra_count = entries
            .iter()
            .filter(|e| matches!(e, DiffEntry::Extra(_)))
            .count();

        Self {
            reference_text: reference.to_string(),
            normalized_reference,
            transcription: transcription.to_string(),
            normalized_transcription,
            similarity_percentage,
            common_count,
            missing_count,
            extra_count,
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_reading() {
        let report = ComparisonReport::build("محمود والد زيد", "محمود والد زيد", true);
        assert_eq!(report.similarity_percentage, 100.0);
        assert_eq!(report.common_count, 3);
        assert_eq!(report.missing_count, 0);
        assert_eq!(report.extra_count, 0);
    }

    #[test]
    fn truncated_reading() {
        let report = ComparisonReport::build("محمود والد زيد وهو يعمل", "محمود والد", true);
        assert_eq!(report.common_count, 2);
        assert_eq!(report.missing_count, 3);
        assert_eq!(report.extra_count, 0);
        assert!(report.similarity_percentage > 0.0);
        assert!(report.similarity_percentage < 100.0);
    }

    #[test]
    fn normalizes_before_comparing() {
        let report = ComparisonReport::build("\"hello   world\\n\"", "hello world", false);
        assert_eq!(report.normalized_reference, "hello world");
        assert_eq!(report.similarity_percentage, 100.0);
    }

    #[test]
    fn diacritics_do_not_count_against_the_learner() {
        let report = ComparisonReport::build("مَحمود", "محمود", true);
        assert_eq!(report.similarity_percentage, 100.0);
        assert_eq!(report.common_count, 1);
    }

    #[test]
    fn count_conservation_holds() {
        let report = ComparisonReport::build("a b c d", "b c x", false);
        let reference_tokens = report.normalized_reference.split_whitespace().count();
        let transcription_tokens = report
            .normalized_transcription
            .split_whitespace()
            .count();
        assert_eq!(report.common_count + report.missing_count, reference_tokens);
        assert_eq!(report.common_count + report.extra_count, transcription_tokens);
    }
}
