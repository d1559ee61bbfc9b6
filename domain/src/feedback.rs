//! Maps a similarity percentage to a qualitative, localized message.

use serde::Serialize;

use crate::LanguageTag;

/// Quality tier for a reading attempt. Thresholds are inclusive lower
/// bounds and identical for every language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackTier {
    Excellent,
    Good,
    Acceptable,
    NeedsPractice,
}

impl FeedbackTier {
    /// Percentages outside [0, 100] are not clamped; the open-ended
    /// comparisons below still bucket them (above 100 is excellent,
    /// below 0 needs practice).
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            FeedbackTier::Excellent
        } else if percentage >= 70.0 {
            FeedbackTier::Good
        } else if percentage >= 50.0 {
            FeedbackTier::Acceptable
        } else {
            FeedbackTier::NeedsPractice
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackMessage {
    pub tier: FeedbackTier,
    pub text: String,
}

/// Builds the learner-facing message for a similarity percentage, with
/// the percentage embedded at two decimal places.
pub fn classify(percentage: f64, language: LanguageTag) -> FeedbackMessage {
    let tier = FeedbackTier::for_percentage(percentage);
    let text = match (language, tier) {
        (LanguageTag::Fr, FeedbackTier::Excellent) => {
            format!("🌟 Excellente lecture ! 👏 ({percentage:.2}%)")
        }
        (LanguageTag::Fr, FeedbackTier::Good) => {
            format!("👍 Bonne lecture, attention à quelques erreurs. ({percentage:.2}%)")
        }
        (LanguageTag::Fr, FeedbackTier::Acceptable) => {
            format!("🙂 Lecture passable, tu peux mieux faire. ({percentage:.2}%)")
        }
        (LanguageTag::Fr, FeedbackTier::NeedsPractice) => {
            format!("🛠️ Lecture difficile, un peu de pratique aidera ! ({percentage:.2}%)")
        }
        (LanguageTag::Ar, FeedbackTier::Excellent) => {
            format!("🌟 قراءة ممتازة! 👏 ({percentage:.2}%)")
        }
        (LanguageTag::Ar, FeedbackTier::Good) => {
            format!("👍 قراءة جيدة، لكن بها بعض الأخطاء. ({percentage:.2}%)")
        }
        (LanguageTag::Ar, FeedbackTier::Acceptable) => {
            format!("🙂 قراءة مقبولة، لكن تحتاج إلى تحسين. ({percentage:.2}%)")
        }
        (LanguageTag::Ar, FeedbackTier::NeedsPractice) => {
            format!("🛠️ قراءة صعبة. تدرب أكثر لتحسن مستواك! ({percentage:.2}%)")
        }
    };
    FeedbackMessage { tier, text }
}
