//! DeleteCommentHandler - Command handler for soft-deleting a comment.
//!
//! Steps run strictly in order and the first failure stops the sequence:
//! payload checks, thread exists, comment belongs to thread, caller owns
//! comment, then the soft delete.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::payload::{as_text, is_truthy};
use crate::domain::foundation::{CommentId, DomainError, ErrorCode, Field, ThreadId, UserId};
use crate::ports::{CommentRepository, ThreadRepository};

/// Command to delete a comment.
#[derive(Debug, Clone, Default)]
pub struct DeleteCommentCommand {
    pub comment_id: Field,
    pub owner: Field,
    pub thread_id: Field,
}

/// Handler for deleting comments.
pub struct DeleteCommentHandler {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl DeleteCommentHandler {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self { thread_repository, comment_repository }
    }

    pub async fn handle(&self, cmd: DeleteCommentCommand) -> Result<(), DomainError> {
        let (comment_id, owner) = verify_payload(&cmd)?;
        let thread_id = as_text(&cmd.thread_id)
            .and_then(|id| ThreadId::new(id).ok())
            .ok_or_else(|| DomainError::from_code(ErrorCode::DeleteCommentThreadNotFound))?;

        self.thread_repository.verify_thread_by_id(&thread_id).await?;
        self.comment_repository
            .verify_comment_by_thread_and_comment_id(&thread_id, &comment_id)
            .await?;
        self.comment_repository.verify_comment_owner(&comment_id, &owner).await?;
        debug!(comment_id = %comment_id, owner = %owner, "Comment deletion authorized");

        self.comment_repository.delete_comment_by_id(&comment_id).await?;

        info!(comment_id = %comment_id, thread_id = %thread_id, "Comment soft-deleted");
        Ok(())
    }
}

fn verify_payload(cmd: &DeleteCommentCommand) -> Result<(CommentId, UserId), DomainError> {
    if !is_truthy(&cmd.comment_id) {
        return Err(ErrorCode::DeleteCommentMissingCommentId.into());
    }

    let invalid = || DomainError::from_code(ErrorCode::DeleteCommentInvalidPayload);
    let comment_id = as_text(&cmd.comment_id)
        .and_then(|id| CommentId::new(id).ok())
        .ok_or_else(invalid)?;
    let owner = as_text(&cmd.owner).and_then(|id| UserId::new(id).ok()).ok_or_else(invalid)?;

    Ok((comment_id, owner))
}
