//! PostgreSQL implementation of ReplyRepository.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::warn;

use super::thread_repository::get;
use crate::domain::foundation::{
    CommentId, DomainError, ErrorCode, OwnedByUser, ReplyId, Timestamp, UserId,
};
use crate::domain::reply::{AddedReply, Reply, ReplyRecord, ReplyRow};
use crate::ports::{IdGenerator, ReplyRepository};

/// PostgreSQL implementation of ReplyRepository.
#[derive(Clone)]
pub struct PostgresReplyRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl PostgresReplyRepository {
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }

    async fn find_reply_by_id(&self, reply_id: &ReplyId) -> Result<Option<ReplyRecord>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, content, owner, comment_id, created_at, is_deleted
            FROM replies
            WHERE id = $1
            "#,
        )
        .bind(reply_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch reply", e))?;

        row.map(|row| row_to_record(&row)).transpose()
    }
}

#[async_trait]
impl ReplyRepository for PostgresReplyRepository {
    async fn add_reply(&self, reply: &Reply) -> Result<AddedReply, DomainError> {
        let id = ReplyId::with_suffix(&self.id_generator.generate());
        let created_at = Timestamp::now();

        let row = sqlx::query(
            r#"
            INSERT INTO replies (id, content, owner, comment_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, content, owner
            "#,
        )
        .bind(id.as_str())
        .bind(reply.content())
        .bind(reply.owner().as_str())
        .bind(reply.comment_id().as_str())
        .bind(created_at.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to insert reply");
            DomainError::database("Failed to insert reply", e)
        })?;

        AddedReply::new(
            get::<String>(&row, "id")?,
            get::<String>(&row, "content")?,
            get::<String>(&row, "owner")?,
        )
    }

    async fn verify_reply_by_id_and_comment_id(
        &self,
        reply_id: &ReplyId,
        comment_id: &CommentId,
    ) -> Result<(), DomainError> {
        let found = sqlx::query("SELECT 1 FROM replies WHERE id = $1 AND comment_id = $2")
            .bind(reply_id.as_str())
            .bind(comment_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to verify reply", e))?;

        match found {
            Some(_) => Ok(()),
            None => Err(DomainError::from_code(ErrorCode::ReplyNotFound)
                .with_detail("reply_id", reply_id.to_string())
                .with_detail("comment_id", comment_id.to_string())),
        }
    }

    async fn verify_reply_owner(
        &self,
        reply_id: &ReplyId,
        owner: &UserId,
    ) -> Result<(), DomainError> {
        self.find_reply_by_id(reply_id)
            .await?
            .ok_or_else(|| DomainError::from_code(ErrorCode::ReplyNotFound))?
            .check_ownership(owner, ErrorCode::ReplyForbidden)
    }

    async fn soft_delete_reply_by_id(&self, reply_id: &ReplyId) -> Result<(), DomainError> {
        sqlx::query("UPDATE replies SET is_deleted = TRUE WHERE id = $1")
            .bind(reply_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, reply_id = %reply_id, "Failed to soft-delete reply");
                DomainError::database("Failed to delete reply", e)
            })?;

        Ok(())
    }

    async fn get_replies_by_comment_ids(
        &self,
        comment_ids: &[CommentId],
    ) -> Result<Vec<ReplyRow>, DomainError> {
        if comment_ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<String> = comment_ids.iter().map(CommentId::to_string).collect();

        let rows = sqlx::query(
            r#"
            SELECT r.id, r.comment_id, u.username, r.created_at AS date, r.content, r.is_deleted
            FROM replies r
            INNER JOIN users u ON u.id = r.owner
            WHERE r.comment_id = ANY($1)
            ORDER BY r.created_at ASC
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch replies by comments", e))?;

        rows.iter().map(row_to_reply).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn ids(row: &sqlx::postgres::PgRow) -> Result<(ReplyId, CommentId), DomainError> {
    let reply_id = ReplyId::new(get::<String>(row, "id")?)
        .map_err(|e| DomainError::database("Invalid reply id", e))?;
    let comment_id = CommentId::new(get::<String>(row, "comment_id")?)
        .map_err(|e| DomainError::database("Invalid comment id", e))?;
    Ok((reply_id, comment_id))
}

fn row_to_reply(row: &sqlx::postgres::PgRow) -> Result<ReplyRow, DomainError> {
    let (id, comment_id) = ids(row)?;
    Ok(ReplyRow {
        id,
        comment_id,
        username: get(row, "username")?,
        date: Timestamp::from_datetime(get(row, "date")?),
        content: get(row, "content")?,
        is_deleted: get(row, "is_deleted")?,
    })
}

fn row_to_record(row: &sqlx::postgres::PgRow) -> Result<ReplyRecord, DomainError> {
    let (id, comment_id) = ids(row)?;
    Ok(ReplyRecord {
        id,
        content: get(row, "content")?,
        owner: UserId::new(get::<String>(row, "owner")?)
            .map_err(|e| DomainError::database("Invalid owner", e))?,
        comment_id,
        created_at: Timestamp::from_datetime(get(row, "created_at")?),
        is_deleted: get(row, "is_deleted")?,
    })
}
