use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::HttpError;

/// JSON extractor that runs `validator` rules after deserialization and
/// rejects bad payloads with 422.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|err| HttpError::Validation {
                message: err.to_string(),
            })?;
        value.validate().map_err(|err| HttpError::Validation {
            message: err.to_string(),
        })?;
        Ok(ValidatedJson(value))
    }
}
