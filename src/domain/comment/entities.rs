//! Write-side comment entities.

use crate::domain::foundation::payload::{all_text, all_truthy, as_text};
use crate::domain::foundation::{
    CommentId, DomainError, ErrorCode, Field, OwnedByUser, ThreadId, Timestamp, UserId,
};

/// Untrusted input for a new comment.
#[derive(Debug, Clone, Default)]
pub struct CommentPayload {
    pub content: Field,
    pub owner: Field,
    pub thread_id: Field,
}

/// A validated comment ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    content: String,
    owner: UserId,
    thread_id: ThreadId,
}

impl Comment {
    /// Validates the payload.
    ///
    /// # Errors
    ///
    /// - `COMMENT.NOT_CONTAIN_NEEDED_PROPERTY` if any field is missing or falsy
    /// - `COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION` if any field is not a string
    pub fn new(payload: CommentPayload) -> Result<Self, DomainError> {
        let CommentPayload { content, owner, thread_id } = payload;

        if !all_truthy(&[&content, &owner, &thread_id]) {
            return Err(ErrorCode::CommentMissingProperty.into());
        }
        if !all_text(&[&content, &owner, &thread_id]) {
            return Err(ErrorCode::CommentInvalidType.into());
        }

        let invalid = |_| DomainError::from_code(ErrorCode::CommentMissingProperty);
        Ok(Self {
            content: as_text(&content).unwrap_or_default().to_string(),
            owner: UserId::new(as_text(&owner).unwrap_or_default()).map_err(invalid)?,
            thread_id: ThreadId::new(as_text(&thread_id).unwrap_or_default()).map_err(invalid)?,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    pub fn thread_id(&self) -> &ThreadId {
        &self.thread_id
    }
}

/// Minimal echo of a stored comment returned after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedComment {
    id: CommentId,
    content: String,
    owner: UserId,
}

impl AddedComment {
    /// # Errors
    ///
    /// - `ADDED_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY` if id, content or owner is empty
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        owner: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let content = content.into();
        let missing = |_| DomainError::from_code(ErrorCode::AddedCommentMissingProperty);
        let id = CommentId::new(id).map_err(missing)?;
        let owner = UserId::new(owner).map_err(missing)?;
        if content.is_empty() {
            return Err(ErrorCode::AddedCommentMissingProperty.into());
        }
        Ok(Self { id, content, owner })
    }

    pub fn id(&self) -> &CommentId {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }
}

/// A comment as stored, including its soft-delete flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    pub id: CommentId,
    pub content: String,
    pub owner: UserId,
    pub thread_id: ThreadId,
    pub created_at: Timestamp,
    pub is_deleted: bool,
}

impl OwnedByUser for CommentRecord {
    fn owner_id(&self) -> &UserId {
        &self.owner
    }
}
