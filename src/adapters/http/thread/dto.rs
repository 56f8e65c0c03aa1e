//! Data transfer objects for thread endpoints.

use serde::Serialize;

use crate::domain::comment::DetailComment;
use crate::domain::reply::DetailReply;
use crate::domain::thread::{AddedThread, DetailThread};

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
pub struct AddedThreadResponse {
    pub id: String,
    pub title: String,
    pub owner: String,
}

impl From<AddedThread> for AddedThreadResponse {
    fn from(added: AddedThread) -> Self {
        Self {
            id: added.id().to_string(),
            title: added.title().to_string(),
            owner: added.owner().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddThreadData {
    pub added_thread: AddedThreadResponse,
}

#[derive(Debug, Serialize)]
pub struct ReplyDetailResponse {
    pub id: String,
    pub content: String,
    pub date: String,
    pub username: String,
}

impl From<&DetailReply> for ReplyDetailResponse {
    fn from(reply: &DetailReply) -> Self {
        Self {
            id: reply.id().to_string(),
            content: reply.content().to_string(),
            date: reply.date().to_iso_string(),
            username: reply.username().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommentDetailResponse {
    pub id: String,
    pub username: String,
    pub date: String,
    pub content: String,
    pub replies: Vec<ReplyDetailResponse>,
}

impl From<&DetailComment> for CommentDetailResponse {
    fn from(comment: &DetailComment) -> Self {
        Self {
            id: comment.id().to_string(),
            username: comment.username().to_string(),
            date: comment.date().to_iso_string(),
            content: comment.content().to_string(),
            replies: comment.replies().iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ThreadDetailResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: String,
    pub username: String,
    pub comments: Vec<CommentDetailResponse>,
}

impl From<&DetailThread> for ThreadDetailResponse {
    fn from(thread: &DetailThread) -> Self {
        Self {
            id: thread.id().to_string(),
            title: thread.title().to_string(),
            body: thread.body().to_string(),
            date: thread.date().to_iso_string(),
            username: thread.username().to_string(),
            comments: thread.comments().iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ThreadDetailData {
    pub thread: ThreadDetailResponse,
}
