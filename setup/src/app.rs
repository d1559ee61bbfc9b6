use std::sync::Arc;

use anyhow::Error;

use lectio_application::{EvaluationUseCase, EvaluationUseCaseImpl};
use lectio_configuration::{AppConfig, ServerConfig};
use lectio_domain::{AttemptStore, TranscriptionPort};
use lectio_http_server::{serve, AppState};
use lectio_infra_persistence::SeaOrmAttemptStore;

pub async fn build_and_run(config: AppConfig, server_config: ServerConfig) -> Result<(), Error> {
    let app = Application::new(config).await?;
    app.run(server_config).await
}

pub struct Application {
    pub config: AppConfig,
    pub state: AppState,
}

impl Application {
    pub async fn new(config: AppConfig) -> Result<Self, Error> {
        #[cfg(feature = "whisper-runtime")]
        tracing::info!("whisper runtime feature enabled");
        #[cfg(not(feature = "whisper-runtime"))]
        tracing::warn!(
            "service compiled without `whisper-runtime`; transcription will return empty text"
        );
        #[cfg(feature = "whisper-cuda")]
        tracing::info!("whisper backend: CUDA");
        #[cfg(feature = "whisper-vulkan")]
        tracing::info!("whisper backend: Vulkan");
        #[cfg(all(
            feature = "whisper-runtime",
            not(feature = "whisper-cuda"),
            not(feature = "whisper-vulkan")
        ))]
        tracing::info!("whisper backend: CPU");

        tracing::info!(
            sample_rate_hz = config.service.audio.sample_rate_hz,
            model_path = %config.service.asr.model_path,
            database_url = %config.service.database.url,
            "initializing reading evaluation application"
        );

        let transcription = build_transcription_port(&config);
        let attempts: Arc<dyn AttemptStore> =
            Arc::new(SeaOrmAttemptStore::connect(&config.service.database.url).await?);
        let evaluation: Arc<dyn EvaluationUseCase> = Arc::new(EvaluationUseCaseImpl::new(
            transcription,
            attempts,
            config.service.audio.sample_rate_hz,
        ));
        let state = AppState::new(evaluation);

        Ok(Self { config, state })
    }

    pub async fn run(self, server_config: ServerConfig) -> Result<(), Error> {
        tracing::info!(
            host = %server_config.host,
            port = server_config.port,
            "starting reading evaluation http server"
        );

        serve(self.state, &server_config)
            .await
            .map_err(|err| anyhow::anyhow!("server startup failed: {err}"))
    }
}

#[cfg(feature = "whisper-runtime")]
fn build_transcription_port(config: &AppConfig) -> Arc<dyn TranscriptionPort> {
    use lectio_infra_asr_whisper::{WhisperAdapterConfig, WhisperTranscriptionAdapter};

    Arc::new(WhisperTranscriptionAdapter::new(WhisperAdapterConfig {
        model_path: config.service.asr.model_path.clone(),
        temperature: config.service.asr.temperature,
        threads: config.service.asr.threads,
    }))
}

#[cfg(not(feature = "whisper-runtime"))]
fn build_transcription_port(_config: &AppConfig) -> Arc<dyn TranscriptionPort> {
    use lectio_infra_asr_whisper::NoopTranscriptionAdapter;

    Arc::new(NoopTranscriptionAdapter)
}
