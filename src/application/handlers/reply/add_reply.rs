//! AddReplyHandler - Command handler for replying to a comment.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::{DomainError, Field};
use crate::domain::reply::{AddedReply, Reply, ReplyPayload};
use crate::ports::{CommentRepository, ReplyRepository};

/// Command to reply to a comment.
#[derive(Debug, Clone, Default)]
pub struct AddReplyCommand {
    pub content: Field,
    pub owner: Field,
    pub comment_id: Field,
    pub thread_id: Field,
}

/// Handler for adding replies.
///
/// The payload is validated before the comment is looked up.
pub struct AddReplyHandler {
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
}

impl AddReplyHandler {
    pub fn new(
        comment_repository: Arc<dyn CommentRepository>,
        reply_repository: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self { comment_repository, reply_repository }
    }

    pub async fn handle(&self, cmd: AddReplyCommand) -> Result<AddedReply, DomainError> {
        let reply = Reply::new(ReplyPayload {
            content: cmd.content,
            owner: cmd.owner,
            comment_id: cmd.comment_id,
            thread_id: cmd.thread_id,
        })?;

        self.comment_repository
            .verify_comment_by_thread_and_comment_id(reply.thread_id(), reply.comment_id())
            .await?;
        debug!(comment_id = %reply.comment_id(), "Comment verified for new reply");

        let added = self.reply_repository.add_reply(&reply).await?;

        info!(reply_id = %added.id(), comment_id = %reply.comment_id(), "Reply added");
        Ok(added)
    }
}
