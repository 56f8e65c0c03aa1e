//! Read projection of a whole thread with its comments and replies.

use crate::domain::comment::DetailComment;
use crate::domain::foundation::{DomainError, ErrorCode, ThreadId, Timestamp};

/// A thread row joined with its author's username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadRow {
    pub id: ThreadId,
    pub title: String,
    pub body: String,
    pub date: Timestamp,
    pub username: String,
}

/// A thread with its comments in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailThread {
    id: ThreadId,
    title: String,
    body: String,
    date: Timestamp,
    username: String,
    comments: Vec<DetailComment>,
}

impl DetailThread {
    /// `comments` defaults to empty when `None`.
    ///
    /// # Errors
    ///
    /// - `DETAIL_THREAD.NOT_CONTAIN_NEEDED_PROPERTY` if title, body or username is empty
    pub fn new(row: ThreadRow, comments: Option<Vec<DetailComment>>) -> Result<Self, DomainError> {
        if row.title.is_empty() || row.body.is_empty() || row.username.is_empty() {
            return Err(DomainError::from_code(ErrorCode::DetailThreadMissingProperty)
                .with_detail("thread_id", row.id.to_string()));
        }

        Ok(Self {
            id: row.id,
            title: row.title,
            body: row.body,
            date: row.date,
            username: row.username,
            comments: comments.unwrap_or_default(),
        })
    }

    pub fn id(&self) -> &ThreadId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn date(&self) -> &Timestamp {
        &self.date
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn comments(&self) -> &[DetailComment] {
        &self.comments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::comment::CommentRow;
    use crate::domain::foundation::CommentId;

    fn row() -> ThreadRow {
        ThreadRow {
            id: ThreadId::new("thread-123").unwrap(),
            title: "sebuah thread".to_string(),
            body: "isi thread".to_string(),
            date: Timestamp::now(),
            username: "dicoding".to_string(),
        }
    }

    #[test]
    fn defaults_to_no_comments() {
        let detail = DetailThread::new(row(), None).unwrap();
        assert!(detail.comments().is_empty());
        assert_eq!(detail.username(), "dicoding");
    }

    #[test]
    fn keeps_comment_order() {
        let comment = |id: &str| {
            DetailComment::new(
                CommentRow {
                    id: CommentId::new(id).unwrap(),
                    username: "johndoe".to_string(),
                    date: Timestamp::now(),
                    content: "komentar".to_string(),
                    is_deleted: false,
                },
                None,
            )
            .unwrap()
        };
        let detail =
            DetailThread::new(row(), Some(vec![comment("comment-1"), comment("comment-2")]))
                .unwrap();
        let ids: Vec<_> = detail.comments().iter().map(|c| c.id().as_str()).collect();
        assert_eq!(ids, vec!["comment-1", "comment-2"]);
    }

    #[test]
    fn rejects_missing_title() {
        let mut source = row();
        source.title.clear();
        let err = DetailThread::new(source, None).unwrap_err();
        assert_eq!(err.code, ErrorCode::DetailThreadMissingProperty);
    }
}
