use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use lectio_domain::{
    classify, AttemptRecord, AttemptStore, AudioChunk, ComparisonReport, LanguageTag,
    TranscriptionPort, TranscriptionRequest,
};

use crate::{ApplicationError, EvaluateReadingRequest, EvaluateReadingResponse};

#[async_trait]
pub trait EvaluationUseCase: Send + Sync {
    async fn evaluate(
        &self,
        request: EvaluateReadingRequest,
    ) -> Result<EvaluateReadingResponse, ApplicationError>;
}

pub struct EvaluationUseCaseImpl {
    transcription: Arc<dyn TranscriptionPort>,
    attempts: Arc<dyn AttemptStore>,
    sample_rate_hz: u32,
}

impl EvaluationUseCaseImpl {
    pub fn new(
        transcription: Arc<dyn TranscriptionPort>,
        attempts: Arc<dyn AttemptStore>,
        sample_rate_hz: u32,
    ) -> Self {
        Self {
            transcription,
            attempts,
            sample_rate_hz,
        }
    }
}

#[async_trait]
impl EvaluationUseCase for EvaluationUseCaseImpl {
    async fn evaluate(
        &self,
        request: EvaluateReadingRequest,
    ) -> Result<EvaluateReadingResponse, ApplicationError> {
        let EvaluateReadingRequest {
            target_text,
            samples,
            sample_rate_hz,
            language,
            session_id,
            strip_diacritics,
        } = request;

        let language = parse_language(&language)?;
        let session_id = session_id.unwrap_or_else(|| Uuid::new_v4().to_string());
        let strip_diacritics =
            strip_diacritics.unwrap_or_else(|| language.strips_diacritics_by_default());

        tracing::debug!(
            sample_count = samples.len(),
            sample_rate_hz = sample_rate_hz.unwrap_or(self.sample_rate_hz),
            language = language.as_str(),
            session_id = %session_id,
            strip_diacritics,
            "starting reading evaluation"
        );

        let transcription = self
            .transcription
            .transcribe(TranscriptionRequest {
                language,
                audio: AudioChunk {
                    sample_rate_hz: sample_rate_hz.unwrap_or(self.sample_rate_hz),
                    samples,
                },
            })
            .await?
            .text;

        let report = ComparisonReport::build(&target_text, &transcription, strip_diacritics);
        let similarity_percentage = round_to_two_decimals(report.similarity_percentage);
        let feedback = classify(similarity_percentage, language);

        self.attempts
            .record(AttemptRecord {
                language,
                audio_ref: session_id.clone(),
                similarity: similarity_percentage,
                feedback: feedback.text.clone(),
                created_at: Utc::now(),
            })
            .await?;

        let response = EvaluateReadingResponse {
            session_id,
            transcription,
            similarity_percentage,
            feedback: feedback.text,
            common_word_count: report.common_count,
            missing_word_count: report.missing_count,
            extra_word_count: report.extra_count,
            diff: report.entries,
        };

        tracing::debug!(
            similarity_percentage = response.similarity_percentage,
            common_word_count = response.common_word_count,
            missing_word_count = response.missing_word_count,
            extra_word_count = response.extra_word_count,
            "reading evaluation completed"
        );

        Ok(response)
    }
}

fn parse_language(value: &str) -> Result<LanguageTag, ApplicationError> {
    match value.to_ascii_lowercase().as_str() {
        "ar" => Ok(LanguageTag::Ar),
        "fr" => Ok(LanguageTag::Fr),
        other => Err(ApplicationError::Validation(format!(
            "unsupported language `{other}`; expected `ar` or `fr`"
        ))),
    }
}

fn round_to_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
