//! Read projection of a comment inside a thread detail.

use crate::domain::foundation::{CommentId, DomainError, ErrorCode, Timestamp};
use crate::domain::reply::DetailReply;

/// Content shown in place of a soft-deleted comment.
pub const COMMENT_REDACTION_MARKER: &str = "**komentar telah dihapus**";

/// A comment row joined with its author's username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRow {
    pub id: CommentId,
    pub username: String,
    pub date: Timestamp,
    pub content: String,
    pub is_deleted: bool,
}

/// A comment as shown in a thread detail, with its replies attached.
///
/// Content of a deleted comment is replaced once, here, and never again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailComment {
    id: CommentId,
    username: String,
    date: Timestamp,
    content: String,
    is_deleted: bool,
    replies: Vec<DetailReply>,
}

impl DetailComment {
    /// Builds the projection, redacting deleted content.
    ///
    /// `replies` defaults to empty when `None`.
    ///
    /// # Errors
    ///
    /// - `DETAIL_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY` if the username is empty
    pub fn new(row: CommentRow, replies: Option<Vec<DetailReply>>) -> Result<Self, DomainError> {
        if row.username.is_empty() {
            return Err(DomainError::from_code(ErrorCode::DetailCommentMissingProperty)
                .with_detail("comment_id", row.id.to_string()));
        }

        let content = if row.is_deleted {
            COMMENT_REDACTION_MARKER.to_string()
        } else {
            row.content
        };

        Ok(Self {
            id: row.id,
            username: row.username,
            date: row.date,
            content,
            is_deleted: row.is_deleted,
            replies: replies.unwrap_or_default(),
        })
    }

    pub fn id(&self) -> &CommentId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn date(&self) -> &Timestamp {
        &self.date
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    pub fn replies(&self) -> &[DetailReply] {
        &self.replies
    }
}
