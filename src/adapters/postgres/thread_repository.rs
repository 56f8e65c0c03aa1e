//! PostgreSQL implementation of ThreadRepository.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::warn;

use crate::domain::foundation::{DomainError, ErrorCode, ThreadId, Timestamp};
use crate::domain::thread::{AddedThread, NewThread, ThreadRow};
use crate::ports::{IdGenerator, ThreadRepository};

/// PostgreSQL implementation of ThreadRepository.
#[derive(Clone)]
pub struct PostgresThreadRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl PostgresThreadRepository {
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[async_trait]
impl ThreadRepository for PostgresThreadRepository {
    async fn add_thread(&self, thread: &NewThread) -> Result<AddedThread, DomainError> {
        let id = ThreadId::with_suffix(&self.id_generator.generate());
        let created_at = Timestamp::now();

        let row = sqlx::query(
            r#"
            INSERT INTO threads (id, title, body, owner, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, owner
            "#,
        )
        .bind(id.as_str())
        .bind(thread.title())
        .bind(thread.body())
        .bind(thread.owner().as_str())
        .bind(created_at.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to insert thread");
            DomainError::database("Failed to insert thread", e)
        })?;

        AddedThread::new(
            get::<String>(&row, "id")?,
            get::<String>(&row, "title")?,
            get::<String>(&row, "owner")?,
        )
    }

    async fn verify_thread_by_id(&self, thread_id: &ThreadId) -> Result<(), DomainError> {
        let found = sqlx::query("SELECT 1 FROM threads WHERE id = $1")
            .bind(thread_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to verify thread", e))?;

        match found {
            Some(_) => Ok(()),
            None => Err(DomainError::from_code(ErrorCode::ThreadNotFound)
                .with_detail("thread_id", thread_id.to_string())),
        }
    }

    async fn get_thread_by_id(
        &self,
        thread_id: &ThreadId,
    ) -> Result<Option<ThreadRow>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT t.id, t.title, t.body, t.created_at AS date, u.username
            FROM threads t
            INNER JOIN users u ON u.id = t.owner
            WHERE t.id = $1
            "#,
        )
        .bind(thread_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch thread", e))?;

        row.map(|row| row_to_thread(&row)).transpose()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_thread(row: &sqlx::postgres::PgRow) -> Result<ThreadRow, DomainError> {
    let id: String = get(row, "id")?;
    Ok(ThreadRow {
        id: ThreadId::new(id).map_err(|e| DomainError::database("Invalid thread id", e))?,
        title: get(row, "title")?,
        body: get(row, "body")?,
        date: Timestamp::from_datetime(get(row, "date")?),
        username: get(row, "username")?,
    })
}

pub(super) fn get<'r, T>(row: &'r sqlx::postgres::PgRow, column: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(column)
        .map_err(|e| DomainError::database(&format!("Failed to get {}", column), e))
}
