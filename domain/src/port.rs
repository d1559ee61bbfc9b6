use async_trait::async_trait;

use crate::{AttemptRecord, DomainError, TranscriptionOutput, TranscriptionRequest};

#[async_trait]
pub trait TranscriptionPort: Send + Sync {
    async fn transcribe(
        &self,
        request: TranscriptionRequest,
    ) -> Result<TranscriptionOutput, DomainError>;
}

#[async_trait]
pub trait AttemptStore: Send + Sync {
    async fn record(&self, attempt: AttemptRecord) -> Result<(), DomainError>;
}
