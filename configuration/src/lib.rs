use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub type AppConfig = LectioConfig;

/// Path to an optional JSON config file; environment variables with the
/// `LECTIO_SERVICE_` prefix override individual fields on top of it.
pub const CONFIG_PATH_ENV: &str = "LECTIO_SERVICE_CONFIG";

const ENV_PREFIX: &str = "LECTIO_SERVICE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for {variable}: {message}")]
    InvalidEnv { variable: String, message: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LectioConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub service: ServiceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub audio: AudioConfig,
    #[serde(default)]
    pub asr: AsrRuntimeConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    #[serde(default = "default_sample_rate")]
    pub sample_rate_hz: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsrRuntimeConfig {
    #[serde(default = "default_model_path")]
    pub model_path: String,
    #[serde(default = "default_language")]
    pub default_language: String,
    #[serde(default)]
    pub temperature: f32,
    #[serde(default = "default_threads")]
    pub threads: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
}

impl Default for LectioConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            service: ServiceConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            audio: AudioConfig::default(),
            asr: AsrRuntimeConfig::default(),
            database: DatabaseConfig::default(),
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: default_sample_rate(),
        }
    }
}

impl Default for AsrRuntimeConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            default_language: default_language(),
            temperature: 0.0,
            threads: default_threads(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
        }
    }
}

pub fn load_config() -> Result<LectioConfig, ConfigError> {
    let mut config = match env::var(CONFIG_PATH_ENV) {
        Ok(path) => load_from_file(Path::new(&path))?,
        Err(_) => LectioConfig::default(),
    };
    apply_env_overrides(&mut config)?;
    Ok(config)
}

fn load_from_file(path: &Path) -> Result<LectioConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn apply_env_overrides(config: &mut LectioConfig) -> Result<(), ConfigError> {
    if let Some(host) = env_string("SERVER_HOST") {
        config.server.host = host;
    }
    if let Some(port) = env_parsed::<u16>("SERVER_PORT")? {
        config.server.port = port;
    }
    if let Some(level) = env_string("LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(sample_rate) = env_parsed::<u32>("SAMPLE_RATE_HZ")? {
        config.service.audio.sample_rate_hz = sample_rate;
    }
    if let Some(model_path) = env_string("MODEL_PATH") {
        config.service.asr.model_path = model_path;
    }
    if let Some(language) = env_string("DEFAULT_LANGUAGE") {
        config.service.asr.default_language = language;
    }
    if let Some(threads) = env_parsed::<usize>("ASR_THREADS")? {
        config.service.asr.threads = threads;
    }
    if let Some(url) = env_string("DATABASE_URL") {
        config.service.database.url = url;
    }
    Ok(())
}

fn env_string(suffix: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{suffix}")).ok()
}

fn env_parsed<T: std::str::FromStr>(suffix: &str) -> Result<Option<T>, ConfigError>
where
    T::Err: std::fmt::Display,
{
    let variable = format!("{ENV_PREFIX}_{suffix}");
    match env::var(&variable) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|err| ConfigError::InvalidEnv {
                variable,
                message: err.to_string(),
            }),
        Err(_) => Ok(None),
    }
}

/// Installs the global tracing subscriber. `RUST_LOG` wins over the
/// configured level when set.
pub fn setup_logging(config: &LectioConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_sample_rate() -> u32 {
    16_000
}

fn default_model_path() -> String {
    "models/ggml-base.bin".to_string()
}

fn default_language() -> String {
    "ar".to_string()
}

fn default_threads() -> usize {
    4
}

fn default_database_url() -> String {
    "sqlite::memory:".to_string()
}
