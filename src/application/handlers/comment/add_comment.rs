//! AddCommentHandler - Command handler for commenting on a thread.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::comment::{AddedComment, Comment, CommentPayload};
use crate::domain::foundation::payload::as_text;
use crate::domain::foundation::{DomainError, ErrorCode, Field, ThreadId};
use crate::ports::{CommentRepository, ThreadRepository};

/// Command to comment on a thread.
#[derive(Debug, Clone, Default)]
pub struct AddCommentCommand {
    pub content: Field,
    pub owner: Field,
    pub thread_id: Field,
}

/// Handler for adding comments.
///
/// The thread is checked before the comment is validated or stored, so a
/// comment is never persisted against a missing thread.
pub struct AddCommentHandler {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl AddCommentHandler {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self { thread_repository, comment_repository }
    }

    pub async fn handle(&self, cmd: AddCommentCommand) -> Result<AddedComment, DomainError> {
        let thread_id = as_text(&cmd.thread_id)
            .and_then(|id| ThreadId::new(id).ok())
            .ok_or_else(|| DomainError::from_code(ErrorCode::AddCommentThreadNotFound))?;

        self.thread_repository.verify_thread_by_id(&thread_id).await?;
        debug!(thread_id = %thread_id, "Thread verified for new comment");

        let comment = Comment::new(CommentPayload {
            content: cmd.content,
            owner: cmd.owner,
            thread_id: cmd.thread_id,
        })?;

        let added = self.comment_repository.add_comment(&comment).await?;

        info!(comment_id = %added.id(), thread_id = %thread_id, "Comment added");
        Ok(added)
    }
}
