use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageTag {
    Ar,
    Fr,
}

impl LanguageTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageTag::Ar => "ar",
            LanguageTag::Fr => "fr",
        }
    }

    /// Arabic transcripts carry combining diacritics the learner is not
    /// graded on; French ones do not.
    pub fn strips_diacritics_by_default(&self) -> bool {
        matches!(self, LanguageTag::Ar)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioChunk {
    pub sample_rate_hz: u32,
    pub samples: Vec<f32>,
}

#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    pub language: LanguageTag,
    pub audio: AudioChunk,
}

#[derive(Debug, Clone)]
pub struct TranscriptionOutput {
    pub text: String,
}

/// One persisted evaluation attempt, as handed to the attempt store.
#[derive(Debug, Clone)]
pub struct AttemptRecord {
    pub language: LanguageTag,
    pub audio_ref: String,
    pub similarity: f64,
    pub feedback: String,
    pub created_at: DateTime<Utc>,
}
