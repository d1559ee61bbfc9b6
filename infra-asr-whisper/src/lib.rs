use async_trait::async_trait;

use lectio_domain::{DomainError, TranscriptionOutput, TranscriptionPort, TranscriptionRequest};

#[derive(Debug, Clone)]
pub struct WhisperAdapterConfig {
    pub model_path: String,
    pub temperature: f32,
    pub threads: usize,
}

/// Stand-in transcription port used when the service is compiled
/// without a speech runtime. Returns an empty transcription so the rest
/// of the evaluation pipeline stays exercisable.
pub struct NoopTranscriptionAdapter;

#[async_trait]
impl TranscriptionPort for NoopTranscriptionAdapter {
    async fn transcribe(
        &self,
        request: TranscriptionRequest,
    ) -> Result<TranscriptionOutput, DomainError> {
        tracing::warn!(
            sample_count = request.audio.samples.len(),
            language = request.language.as_str(),
            "no speech runtime compiled in; returning empty transcription"
        );
        Ok(TranscriptionOutput {
            text: String::new(),
        })
    }
}

#[cfg(feature = "whisper-runtime")]
mod whisper {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

    use lectio_domain::{
        DomainError, TranscriptionOutput, TranscriptionPort, TranscriptionRequest,
    };

    use super::{decode_language, WhisperAdapterConfig};

    pub struct WhisperTranscriptionAdapter {
        config: WhisperAdapterConfig,
        runtime: Mutex<WhisperRuntime>,
    }

    struct WhisperRuntime {
        context: Option<WhisperContext>,
    }

    impl WhisperTranscriptionAdapter {
        pub fn new(config: WhisperAdapterConfig) -> Self {
            Self {
                config,
                runtime: Mutex::new(WhisperRuntime { context: None }),
            }
        }

        fn transcribe_with_runtime(
            &self,
            request: TranscriptionRequest,
        ) -> Result<TranscriptionOutput, DomainError> {
            let mut runtime = self
                .runtime
                .lock()
                .map_err(|_| DomainError::internal_error("whisper runtime lock poisoned"))?;

            if runtime.context.is_none() {
                let context_params = WhisperContextParameters::default();
                let whisper_context =
                    WhisperContext::new_with_params(&self.config.model_path, context_params)
                        .map_err(|err| {
                            DomainError::external_service_error(
                                "whisper",
                                format!("failed to load model: {err}"),
                            )
                        })?;
                runtime.context = Some(whisper_context);
            }

            let whisper_context = runtime
                .context
                .as_ref()
                .ok_or_else(|| DomainError::internal_error("whisper context unavailable"))?;

            let mut state = whisper_context.create_state().map_err(|err| {
                DomainError::external_service_error(
                    "whisper",
                    format!("failed to create state: {err}"),
                )
            })?;

            let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
            params.set_n_threads(self.config.threads as i32);
            params.set_language(Some(decode_language(request.language)));
            params.set_temperature(self.config.temperature);
            params.set_no_timestamps(true);
            params.set_print_realtime(false);
            params.set_print_progress(false);
            params.set_print_timestamps(false);

            state.full(params, &request.audio.samples).map_err(|err| {
                DomainError::external_service_error(
                    "whisper",
                    format!("full decode failed: {err}"),
                )
            })?;

            let mut parts = Vec::new();
            for idx in 0..state.full_n_segments() {
                let Some(segment) = state.get_segment(idx) else {
                    continue;
                };
                let text = segment
                    .to_str_lossy()
                    .map(|cow| cow.to_string())
                    .unwrap_or_default();
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    parts.push(trimmed.to_string());
                }
            }

            Ok(TranscriptionOutput {
                text: parts.join(" "),
            })
        }
    }

    #[async_trait]
    impl TranscriptionPort for WhisperTranscriptionAdapter {
        async fn transcribe(
            &self,
            request: TranscriptionRequest,
        ) -> Result<TranscriptionOutput, DomainError> {
            self.transcribe_with_runtime(request)
        }
    }
}

#[cfg(feature = "whisper-runtime")]
pub use whisper::WhisperTranscriptionAdapter;

#[cfg(feature = "whisper-runtime")]
fn decode_language(language: lectio_domain::LanguageTag) -> &'static str {
    match language {
        lectio_domain::LanguageTag::Ar => "ar",
        lectio_domain::LanguageTag::Fr => "fr",
    }
}
