//! PostgreSQL implementation of CommentRepository.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::warn;

use super::thread_repository::get;
use crate::domain::comment::{AddedComment, Comment, CommentRecord, CommentRow};
use crate::domain::foundation::{
    CommentId, DomainError, ErrorCode, OwnedByUser, ThreadId, Timestamp, UserId,
};
use crate::ports::{CommentRepository, IdGenerator};

/// PostgreSQL implementation of CommentRepository.
#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn add_comment(&self, comment: &Comment) -> Result<AddedComment, DomainError> {
        let id = CommentId::with_suffix(&self.id_generator.generate());
        let created_at = Timestamp::now();

        let row = sqlx::query(
            r#"
            INSERT INTO comments (id, content, owner, thread_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, content, owner
            "#,
        )
        .bind(id.as_str())
        .bind(comment.content())
        .bind(comment.owner().as_str())
        .bind(comment.thread_id().as_str())
        .bind(created_at.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to insert comment");
            DomainError::database("Failed to insert comment", e)
        })?;

        AddedComment::new(
            get::<String>(&row, "id")?,
            get::<String>(&row, "content")?,
            get::<String>(&row, "owner")?,
        )
    }

    async fn verify_comment_by_thread_and_comment_id(
        &self,
        thread_id: &ThreadId,
        comment_id: &CommentId,
    ) -> Result<(), DomainError> {
        let found = sqlx::query("SELECT 1 FROM comments WHERE id = $1 AND thread_id = $2")
            .bind(comment_id.as_str())
            .bind(thread_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to verify comment", e))?;

        match found {
            Some(_) => Ok(()),
            None => Err(DomainError::from_code(ErrorCode::CommentNotFound)
                .with_detail("thread_id", thread_id.to_string())
                .with_detail("comment_id", comment_id.to_string())),
        }
    }

    async fn verify_comment_owner(
        &self,
        comment_id: &CommentId,
        owner: &UserId,
    ) -> Result<(), DomainError> {
        self.find_comment_by_id(comment_id)
            .await?
            .ok_or_else(|| DomainError::from_code(ErrorCode::CommentNotFound))?
            .check_ownership(owner, ErrorCode::CommentForbidden)
    }

    async fn find_comment_by_id(
        &self,
        comment_id: &CommentId,
    ) -> Result<Option<CommentRecord>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, content, owner, thread_id, created_at, is_deleted
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(comment_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch comment", e))?;

        row.map(|row| row_to_record(&row)).transpose()
    }

    async fn delete_comment_by_id(&self, comment_id: &CommentId) -> Result<(), DomainError> {
        sqlx::query("UPDATE comments SET is_deleted = TRUE WHERE id = $1")
            .bind(comment_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, comment_id = %comment_id, "Failed to soft-delete comment");
                DomainError::database("Failed to delete comment", e)
            })?;

        Ok(())
    }

    async fn get_comments_by_thread_id(
        &self,
        thread_id: &ThreadId,
    ) -> Result<Vec<CommentRow>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT c.id, u.username, c.created_at AS date, c.content, c.is_deleted
            FROM comments c
            INNER JOIN users u ON u.id = c.owner
            WHERE c.thread_id = $1
            ORDER BY c.created_at ASC
            "#,
        )
        .bind(thread_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch comments by thread", e))?;

        rows.iter().map(row_to_comment).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn comment_id(row: &sqlx::postgres::PgRow) -> Result<CommentId, DomainError> {
    CommentId::new(get::<String>(row, "id")?)
        .map_err(|e| DomainError::database("Invalid comment id", e))
}

fn row_to_comment(row: &sqlx::postgres::PgRow) -> Result<CommentRow, DomainError> {
    Ok(CommentRow {
        id: comment_id(row)?,
        username: get(row, "username")?,
        date: Timestamp::from_datetime(get(row, "date")?),
        content: get(row, "content")?,
        is_deleted: get(row, "is_deleted")?,
    })
}

fn row_to_record(row: &sqlx::postgres::PgRow) -> Result<CommentRecord, DomainError> {
    Ok(CommentRecord {
        id: comment_id(row)?,
        content: get(row, "content")?,
        owner: UserId::new(get::<String>(row, "owner")?)
            .map_err(|e| DomainError::database("Invalid owner", e))?,
        thread_id: ThreadId::new(get::<String>(row, "thread_id")?)
            .map_err(|e| DomainError::database("Invalid thread id", e))?,
        created_at: Timestamp::from_datetime(get(row, "created_at")?),
        is_deleted: get(row, "is_deleted")?,
    })
}
