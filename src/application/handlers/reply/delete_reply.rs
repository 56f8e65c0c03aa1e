//! DeleteReplyHandler - Command handler for soft-deleting a reply.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::payload::{all_text, all_truthy, as_text};
use crate::domain::foundation::{
    CommentId, DomainError, ErrorCode, Field, ReplyId, ThreadId, UserId,
};
use crate::ports::{CommentRepository, ReplyRepository};

/// Command to delete a reply.
#[derive(Debug, Clone, Default)]
pub struct DeleteReplyCommand {
    pub reply_id: Field,
    pub owner: Field,
    pub comment_id: Field,
    pub thread_id: Field,
}

/// Typed identifiers pulled out of a checked command.
struct DeleteReplyTarget {
    reply_id: ReplyId,
    owner: UserId,
    comment_id: CommentId,
    thread_id: ThreadId,
}

/// Handler for deleting replies.
pub struct DeleteReplyHandler {
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
}

impl DeleteReplyHandler {
    pub fn new(
        comment_repository: Arc<dyn CommentRepository>,
        reply_repository: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self { comment_repository, reply_repository }
    }

    pub async fn handle(&self, cmd: DeleteReplyCommand) -> Result<(), DomainError> {
        let target = verify_payload(&cmd)?;

        self.comment_repository
            .verify_comment_by_thread_and_comment_id(&target.thread_id, &target.comment_id)
            .await?;
        self.reply_repository
            .verify_reply_by_id_and_comment_id(&target.reply_id, &target.comment_id)
            .await?;
        self.reply_repository.verify_reply_owner(&target.reply_id, &target.owner).await?;
        debug!(reply_id = %target.reply_id, owner = %target.owner, "Reply deletion authorized");

        self.reply_repository.soft_delete_reply_by_id(&target.reply_id).await?;

        info!(reply_id = %target.reply_id, comment_id = %target.comment_id, "Reply soft-deleted");
        Ok(())
    }
}

fn verify_payload(cmd: &DeleteReplyCommand) -> Result<DeleteReplyTarget, DomainError> {
    let fields = [&cmd.reply_id, &cmd.owner, &cmd.comment_id, &cmd.thread_id];
    if !all_truthy(&fields) {
        return Err(ErrorCode::DeleteReplyMissingProperty.into());
    }
    if !all_text(&fields) {
        return Err(ErrorCode::DeleteReplyInvalidType.into());
    }

    let missing = |_| DomainError::from_code(ErrorCode::DeleteReplyMissingProperty);
    let text = |field: &Field| as_text(field).unwrap_or_default().to_string();
    Ok(DeleteReplyTarget {
        reply_id: ReplyId::new(text(&cmd.reply_id)).map_err(missing)?,
        owner: UserId::new(text(&cmd.owner)).map_err(missing)?,
        comment_id: CommentId::new(text(&cmd.comment_id)).map_err(missing)?,
        thread_id: ThreadId::new(text(&cmd.thread_id)).map_err(missing)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{
        comment_record, reply_record, MockCommentRepository, MockReplyRepository,
    };
    use crate::domain::foundation::payload::text;
    use serde_json::json;

    fn command() -> DeleteReplyCommand {
        DeleteReplyCommand {
            reply_id: text("reply-123"),
            owner: text("user-123"),
            comment_id: text("comment-123"),
            thread_id: text("thread-123"),
        }
    }

    fn repos(reply_owner: &str) -> (Arc<MockCommentRepository>, Arc<MockReplyRepository>) {
        (
            Arc::new(MockCommentRepository::new(vec![comment_record(
                "comment-123",
                "user-999",
                false,
            )])),
            Arc::new(MockReplyRepository::new(vec![reply_record(
                "reply-123",
                "sebuah balasan",
                reply_owner,
                false,
            )])),
        )
    }

    #[tokio::test]
    async fn owner_soft_deletes_reply() {
        let (comments, replies) = repos("user-123");
        let handler = DeleteReplyHandler::new(comments, replies.clone());

        handler.handle(command()).await.unwrap();

        assert_eq!(replies.deleted(), vec![ReplyId::new("reply-123").unwrap()]);
        assert_eq!(
            replies.calls(),
            vec![
                "verify_reply_by_id_and_comment_id",
                "verify_reply_owner",
                "soft_delete_reply_by_id",
            ]
        );
    }

    #[tokio::test]
    async fn non_owner_is_forbidden() {
        let (comments, replies) = repos("user-999");
        let handler = DeleteReplyHandler::new(comments, replies.clone());

        let err = handler.handle(command()).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ReplyForbidden);
        assert!(replies.deleted().is_empty());
    }

    #[tokio::test]
    async fn missing_field_is_rejected_before_any_lookup() {
        let (comments, replies) = repos("user-123");
        let handler = DeleteReplyHandler::new(comments.clone(), replies.clone());

        let cmd = DeleteReplyCommand { thread_id: None, ..command() };
        let err = handler.handle(cmd).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::DeleteReplyMissingProperty);
        assert!(comments.calls().is_empty());
        assert!(replies.calls().is_empty());
    }

    #[tokio::test]
    async fn non_string_field_is_rejected() {
        let (comments, replies) = repos("user-123");
        let handler = DeleteReplyHandler::new(comments, replies);

        let cmd = DeleteReplyCommand { reply_id: Some(json!({"id": 1})), ..command() };
        let err = handler.handle(cmd).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::DeleteReplyInvalidType);
    }

    #[tokio::test]
    async fn unknown_reply_is_not_found() {
        let (comments, replies) = repos("user-123");
        let handler = DeleteReplyHandler::new(comments, replies.clone());

        let cmd = DeleteReplyCommand { reply_id: text("reply-xyz"), ..command() };
        let err = handler.handle(cmd).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ReplyNotFound);
        assert!(replies.deleted().is_empty());
    }

    #[tokio::test]
    async fn comment_outside_thread_stops_before_reply_checks() {
        let (comments, replies) = repos("user-123");
        let handler = DeleteReplyHandler::new(comments, replies.clone());

        let cmd = DeleteReplyCommand { thread_id: text("thread-xyz"), ..command() };
        let err = handler.handle(cmd).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::CommentNotFound);
        assert!(replies.calls().is_empty());
    }
}
