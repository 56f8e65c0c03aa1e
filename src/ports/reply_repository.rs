//! Reply repository port.

use async_trait::async_trait;

use crate::domain::foundation::{CommentId, DomainError, ReplyId, UserId};
use crate::domain::reply::{AddedReply, Reply, ReplyRow};

/// Repository port for replies.
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    /// Persist a new reply under a freshly generated id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn add_reply(&self, reply: &Reply) -> Result<AddedReply, DomainError>;

    /// Succeeds only if the reply exists under the comment.
    ///
    /// # Errors
    ///
    /// - `ReplyNotFound` otherwise
    /// - `DatabaseError` on persistence failure
    async fn verify_reply_by_id_and_comment_id(
        &self,
        reply_id: &ReplyId,
        comment_id: &CommentId,
    ) -> Result<(), DomainError>;

    /// Succeeds only if `owner` wrote the reply.
    ///
    /// # Errors
    ///
    /// - `ReplyForbidden` otherwise
    /// - `DatabaseError` on persistence failure
    async fn verify_reply_owner(&self, reply_id: &ReplyId, owner: &UserId)
        -> Result<(), DomainError>;

    /// Mark the reply as deleted. Content is kept.
    async fn soft_delete_reply_by_id(&self, reply_id: &ReplyId) -> Result<(), DomainError>;

    /// Replies of all given comments in one batch, oldest first.
    ///
    /// An empty slice yields an empty list.
    async fn get_replies_by_comment_ids(
        &self,
        comment_ids: &[CommentId],
    ) -> Result<Vec<ReplyRow>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ReplyRepository) {}
    }
}
