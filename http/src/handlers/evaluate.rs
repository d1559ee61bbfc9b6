use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};

use lectio_application::{EvaluateReadingRequest, EvaluateReadingResponse};

use crate::error::{error_mapper, HttpError};
use crate::extract::ValidatedJson;
use crate::state::AppState;

pub async fn evaluate_reading(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<EvaluateReadingRequest>,
) -> Result<(StatusCode, Json<EvaluateReadingResponse>), HttpError> {
    tracing::info!(
        sample_count = request.samples.len(),
        sample_rate_hz = request.sample_rate_hz.unwrap_or(0),
        language = %request.language,
        session_id = request.session_id.as_deref().unwrap_or("auto"),
        "received evaluate request"
    );

    match state.evaluation.evaluate(request).await {
        Ok(response) => {
            tracing::info!(
                similarity_percentage = response.similarity_percentage,
                common_word_count = response.common_word_count,
                missing_word_count = response.missing_word_count,
                extra_word_count = response.extra_word_count,
                "evaluate request completed"
            );
            Ok((StatusCode::OK, Json(response)))
        }
        Err(error) => {
            tracing::error!(error = %error, "evaluate request failed");
            Err(error_mapper(error))
        }
    }
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
