use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{service} error: {message}")]
    ExternalService { service: String, message: String },

    #[error("persistence error: {0}")]
    Persistence(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn external_service_error(service: &str, message: impl Into<String>) -> Self {
        Self::ExternalService {
            service: service.to_string(),
            message: message.into(),
        }
    }

    pub fn persistence_error(message: impl Into<String>) -> Self {
        Self::Persistence(message.into())
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
