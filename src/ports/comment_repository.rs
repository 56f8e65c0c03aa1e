//! Comment repository port.
//!
//! Comments are never removed. `delete_comment_by_id` only flips the
//! soft-delete flag; redaction happens when the detail view is built.

use async_trait::async_trait;

use crate::domain::comment::{AddedComment, Comment, CommentRecord, CommentRow};
use crate::domain::foundation::{CommentId, DomainError, ThreadId, UserId};

/// Repository port for comments.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persist a new comment under a freshly generated id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn add_comment(&self, comment: &Comment) -> Result<AddedComment, DomainError>;

    /// Succeeds only if the comment exists and belongs to the thread.
    ///
    /// # Errors
    ///
    /// - `CommentNotFound` otherwise
    /// - `DatabaseError` on persistence failure
    async fn verify_comment_by_thread_and_comment_id(
        &self,
        thread_id: &ThreadId,
        comment_id: &CommentId,
    ) -> Result<(), DomainError>;

    /// Succeeds only if `owner` wrote the comment.
    ///
    /// # Errors
    ///
    /// - `CommentForbidden` otherwise
    /// - `DatabaseError` on persistence failure
    async fn verify_comment_owner(
        &self,
        comment_id: &CommentId,
        owner: &UserId,
    ) -> Result<(), DomainError>;

    /// Find a stored comment, deleted or not.
    ///
    /// Returns `None` if not found.
    async fn find_comment_by_id(
        &self,
        comment_id: &CommentId,
    ) -> Result<Option<CommentRecord>, DomainError>;

    /// Mark the comment as deleted. Content is kept.
    async fn delete_comment_by_id(&self, comment_id: &CommentId) -> Result<(), DomainError>;

    /// All comments of a thread, oldest first, joined with usernames.
    async fn get_comments_by_thread_id(
        &self,
        thread_id: &ThreadId,
    ) -> Result<Vec<CommentRow>, DomainError>;
}
