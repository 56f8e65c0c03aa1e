//! Read projection of a reply inside a thread detail.

use crate::domain::foundation::{CommentId, DomainError, ErrorCode, ReplyId, Timestamp};

/// Content shown in place of a soft-deleted reply.
pub const REPLY_REDACTION_MARKER: &str = "**balasan telah dihapus**";

/// A reply row joined with its author's username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyRow {
    pub id: ReplyId,
    pub comment_id: CommentId,
    pub username: String,
    pub date: Timestamp,
    pub content: String,
    pub is_deleted: bool,
}

/// A reply as shown under its comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailReply {
    id: ReplyId,
    username: String,
    date: Timestamp,
    content: String,
}

impl DetailReply {
    /// # Errors
    ///
    /// - `DETAIL_REPLY.NOT_CONTAIN_NEEDED_PROPERTY` if the username is empty
    pub fn new(row: ReplyRow) -> Result<Self, DomainError> {
        if row.username.is_empty() {
            return Err(DomainError::from_code(ErrorCode::DetailReplyMissingProperty)
                .with_detail("reply_id", row.id.to_string()));
        }

        let content = if row.is_deleted {
            REPLY_REDACTION_MARKER.to_string()
        } else {
            row.content
        };

        Ok(Self { id: row.id, username: row.username, date: row.date, content })
    }

    pub fn id(&self) -> &ReplyId {
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
}
