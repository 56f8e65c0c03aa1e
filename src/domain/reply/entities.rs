//! Write-side reply entities.

use crate::domain::foundation::payload::{all_text, all_truthy, as_text};
use crate::domain::foundation::{
    CommentId, DomainError, ErrorCode, Field, OwnedByUser, ReplyId, ThreadId, Timestamp, UserId,
};

/// Untrusted input for a new reply.
#[derive(Debug, Clone, Default)]
pub struct ReplyPayload {
    pub content: Field,
    pub owner: Field,
    pub comment_id: Field,
    pub thread_id: Field,
}

/// A validated reply ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    content: String,
    owner: UserId,
    comment_id: CommentId,
    thread_id: ThreadId,
}

impl Reply {
    /// Validates the payload.
    ///
    /// # Errors
    ///
    /// - `REPLY.NOT_CONTAIN_NEEDED_PROPERTY` if any field is missing or falsy
    /// - `REPLY.NOT_MEET_DATA_TYPE_SPECIFICATION` if any field is not a string
    pub fn new(payload: ReplyPayload) -> Result<Self, DomainError> {
        let ReplyPayload { content, owner, comment_id, thread_id } = payload;
        let fields = [&content, &owner, &comment_id, &thread_id];

        if !all_truthy(&fields) {
            return Err(ErrorCode::ReplyMissingProperty.into());
        }
        if !all_text(&fields) {
            return Err(ErrorCode::ReplyInvalidType.into());
        }

        let invalid = |_| DomainError::from_code(ErrorCode::ReplyMissingProperty);
        Ok(Self {
            content: as_text(&content).unwrap_or_default().to_string(),
            owner: UserId::new(as_text(&owner).unwrap_or_default()).map_err(invalid)?,
            comment_id: CommentId::new(as_text(&comment_id).unwrap_or_default())
                .map_err(invalid)?,
            thread_id: ThreadId::new(as_text(&thread_id).unwrap_or_default()).map_err(invalid)?,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    pub fn comment_id(&self) -> &CommentId {
        &self.comment_id
    }

    pub fn thread_id(&self) -> &ThreadId {
        &self.thread_id
    }
}

/// Minimal echo of a stored reply returned after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedReply {
    id: ReplyId,
    content: String,
    owner: UserId,
}

impl AddedReply {
    /// # Errors
    ///
    /// - `ADDED_REPLY.NOT_CONTAIN_NEEDED_PROPERTY` if id, content or owner is empty
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        owner: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let content = content.into();
        let missing = |_| DomainError::from_code(ErrorCode::AddedReplyMissingProperty);
        let id = ReplyId::new(id).map_err(missing)?;
        let owner = UserId::new(owner).map_err(missing)?;
        if content.is_empty() {
            return Err(ErrorCode::AddedReplyMissingProperty.into());
        }
        Ok(Self { id, content, owner })
    }

    pub fn id(&self) -> &ReplyId {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }
}

/// A reply as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyRecord {
    pub id: ReplyId,
    pub content: String,
    pub owner: UserId,
    pub comment_id: CommentId,
    pub created_at: Timestamp,
    pub is_deleted: bool,
}

impl OwnedByUser for ReplyRecord {
    fn owner_id(&self) -> &UserId {
        &self.owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::payload::text;
    use proptest::prelude::*;
    use serde_json::json;

    fn valid_payload() -> ReplyPayload {
        ReplyPayload {
            content: text("sebuah balasan"),
            owner: text("user-123"),
            comment_id: text("comment-123"),
            thread_id: text("thread-123"),
        }
    }

    #[test]
    fn creates_reply_from_valid_payload() {
        let reply = Reply::new(valid_payload()).unwrap();
        assert_eq!(reply.content(), "sebuah balasan");
        assert_eq!(reply.owner().as_str(), "user-123");
        assert_eq!(reply.comment_id().as_str(), "comment-123");
        assert_eq!(reply.thread_id().as_str(), "thread-123");
    }

    #[test]
    fn rejects_null_comment_id() {
        let payload = ReplyPayload { comment_id: Some(serde_json::Value::Null), ..valid_payload() };
        let err = Reply::new(payload).unwrap_err();
        assert_eq!(err.code, ErrorCode::ReplyMissingProperty);
    }

    #[test]
    fn rejects_numeric_content() {
        let payload = ReplyPayload { content: Some(json!(42)), ..valid_payload() };
        let err = Reply::new(payload).unwrap_err();
        assert_eq!(err.code, ErrorCode::ReplyInvalidType);
    }

    #[test]
    fn added_reply_rejects_empty_content() {
        let err = AddedReply::new("reply-123", "", "user-123").unwrap_err();
        assert_eq!(err.code, ErrorCode::AddedReplyMissingProperty);
    }

    #[test]
    fn reply_record_ownership() {
        let record = ReplyRecord {
            id: ReplyId::new("reply-123").unwrap(),
            content: "balasan".to_string(),
            owner: UserId::new("user-123").unwrap(),
            comment_id: CommentId::new("comment-123").unwrap(),
            created_at: Timestamp::now(),
            is_deleted: false,
        };
        assert!(record.is_owner(&UserId::new("user-123").unwrap()));
        assert!(!record.is_owner(&UserId::new("user-999").unwrap()));
    }

    proptest! {
        #[test]
        fn any_string_content_is_accepted(content in "[a-zA-Z0-9 ]{1,64}") {
            let payload = ReplyPayload { content: text(content.clone()), ..valid_payload() };
            let reply = Reply::new(payload).unwrap();
            prop_assert_eq!(reply.content(), content.as_str());
        }
    }
}
