use serde::{Deserialize, Serialize};
use validator::Validate;

use lectio_domain::DiffEntry;

fn default_language() -> String {
    "ar".to_string()
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EvaluateReadingRequest {
    /// Sentence the learner was asked to read aloud.
    #[validate(length(min = 1))]
    pub target_text: String,
    #[validate(length(min = 1))]
    pub samples: Vec<f32>,
    #[validate(range(min = 8_000, max = 192_000))]
    pub sample_rate_hz: Option<u32>,
    #[serde(default = "default_language")]
    #[validate(length(min = 1, max = 16))]
    pub language: String,
    #[validate(length(min = 1, max = 64))]
    pub session_id: Option<String>,
    /// Overrides the per-language default (Arabic strips, French keeps).
    pub strip_diacritics: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluateReadingResponse {
    pub session_id: String,
    pub transcription: String,
    /// Rounded to two decimals at this boundary.
    pub similarity_percentage: f64,
    pub feedback: String,
    pub common_word_count: usize,
    pub missing_word_count: usize,
    pub extra_word_count: usize,
    pub diff: Vec<DiffEntry>,
}
