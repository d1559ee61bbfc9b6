use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use lectio_application::ApplicationError;

#[derive(Debug)]
pub enum HttpError {
    Validation { message: String },
    NotFound,
    Internal { message: String },
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::Validation { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            HttpError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            HttpError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (
            status,
            Json(json!({
                "error": message,
            })),
        )
            .into_response()
    }
}

pub fn error_mapper(error: ApplicationError) -> HttpError {
    match error {
        ApplicationError::Validation(message) => HttpError::Validation { message },
        ApplicationError::Domain(domain_error) => {
            let message = domain_error.to_string();
            if message.to_ascii_lowercase().contains("not found") {
                HttpError::NotFound
            } else {
                HttpError::Internal { message }
            }
        }
        ApplicationError::Internal(message) => HttpError::Internal { message },
    }
}
