use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Set,
};

use lectio_domain::{AttemptRecord, AttemptStore, DomainError};

pub mod entity;

pub use entity::Entity as AttemptEntity;

const CREATE_ATTEMPT_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS attempt (\
    id INTEGER PRIMARY KEY AUTOINCREMENT,\
    language TEXT NOT NULL,\
    audio_ref TEXT NOT NULL,\
    similarity REAL NOT NULL,\
    feedback TEXT NOT NULL,\
    created_at TEXT NOT NULL\
)";

pub struct SeaOrmAttemptStore {
    db: DatabaseConnection,
}

impl SeaOrmAttemptStore {
    /// Connects and makes sure the attempt table exists. An in-memory
    /// sqlite url is pinned to a single connection, otherwise every
    /// pooled connection would see its own empty database.
    pub async fn connect(url: &str) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(url.to_string());
        if url.contains(":memory:") {
            options.max_connections(1);
        }
        let db = Database::connect(options).await?;
        db.execute_unprepared(CREATE_ATTEMPT_TABLE).await?;
        tracing::info!(url, "attempt store ready");
        Ok(Self { db })
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl AttemptStore for SeaOrmAttemptStore {
    async fn record(&self, attempt: AttemptRecord) -> Result<(), DomainError> {
        let model = entity::ActiveModel {
            language: Set(attempt.language.as_str().to_string()),
            audio_ref: Set(attempt.audio_ref),
            similarity: Set(attempt.similarity),
            feedback: Set(attempt.feedback),
            created_at: Set(attempt.created_at),
            ..Default::default()
        };
        model
            .insert(&self.db)
            .await
            .map_err(|err| DomainError::persistence_error(err.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use lectio_domain::LanguageTag;
    use sea_orm::{EntityTrait, PaginatorTrait};

    #[tokio::test]
    async fn records_one_row_per_attempt() {
        let store = SeaOrmAttemptStore::connect("sqlite::memory:")
            .await
            .expect("in-memory store connects");

        store
            .record(AttemptRecord {
                language: LanguageTag::Ar,
                audio_ref: "session-1".to_string(),
                similarity: 87.5,
                feedback: "👍 قراءة جيدة، لكن بها بعض الأخطاء. (87.50%)".to_string(),
                created_at: Utc::now(),
            })
            .await
            .expect("insert succeeds");

        let count = AttemptEntity::find()
            .count(store.connection())
            .await
            .expect("count succeeds");
        assert_eq!(count, 1);

        let row = AttemptEntity::find()
            .one(store.connection())
            .await
            .expect("query succeeds")
            .expect("row exists");
        assert_eq!(row.language, "ar");
        assert_eq!(row.audio_ref, "session-1");
        assert_eq!(row.similarity, 87.5);
    }
}
