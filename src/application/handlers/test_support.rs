//! Recording port mocks shared by handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::comment::{AddedComment, Comment, CommentRecord, CommentRow};
use crate::domain::foundation::{
    CommentId, DomainError, ErrorCode, OwnedByUser, ReplyId, ThreadId, Timestamp, UserId,
};
use crate::domain::reply::{AddedReply, Reply, ReplyRecord, ReplyRow};
use crate::domain::thread::{AddedThread, NewThread, ThreadRow};
use crate::ports::{CommentRepository, ReplyRepository, ThreadRepository};

pub fn thread_id() -> ThreadId {
    ThreadId::new("thread-123").unwrap()
}

pub fn comment_id() -> CommentId {
    CommentId::new("comment-123").unwrap()
}

pub fn user_id(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

pub fn thread_row() -> ThreadRow {
    ThreadRow {
        id: thread_id(),
        title: "sebuah thread".to_string(),
        body: "isi thread".to_string(),
        date: Timestamp::now(),
        username: "dicoding".to_string(),
    }
}

pub fn comment_record(id: &str, owner: &str, is_deleted: bool) -> CommentRecord {
    CommentRecord {
        id: CommentId::new(id).unwrap(),
        content: "sebuah comment".to_string(),
        owner: user_id(owner),
        thread_id: thread_id(),
        created_at: Timestamp::now(),
        is_deleted,
    }
}

pub fn reply_record(id: &str, content: &str, owner: &str, is_deleted: bool) -> ReplyRecord {
    ReplyRecord {
        id: ReplyId::new(id).unwrap(),
        content: content.to_string(),
        owner: user_id(owner),
        comment_id: comment_id(),
        created_at: Timestamp::now(),
        is_deleted,
    }
}

fn record(calls: &Mutex<Vec<String>>, call: &str) {
    calls.lock().unwrap().push(call.to_string());
}

// ════════════════════════════════════════════════════════════════════════════
// Threads
// ════════════════════════════════════════════════════════════════════════════

pub struct MockThreadRepository {
    thread: Option<ThreadRow>,
    added: Mutex<Vec<NewThread>>,
    calls: Mutex<Vec<String>>,
    fail: bool,
}

impl MockThreadRepository {
    pub fn empty() -> Self {
        Self { thread: None, added: Mutex::new(Vec::new()), calls: Mutex::new(Vec::new()), fail: false }
    }

    pub fn with_thread(thread: ThreadRow) -> Self {
        Self { thread: Some(thread), ..Self::empty() }
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::empty() }
    }

    pub fn added(&self) -> Vec<NewThread> {
        self.added.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ThreadRepository for MockThreadRepository {
    async fn add_thread(&self, thread: &NewThread) -> Result<AddedThread, DomainError> {
        record(&self.calls, "add_thread");
        if self.fail {
            return Err(DomainError::new(ErrorCode::DatabaseError, "Simulated insert failure"));
        }
        self.added.lock().unwrap().push(thread.clone());
        AddedThread::new("thread-123", thread.title(), thread.owner().as_str())
    }

    async fn verify_thread_by_id(&self, thread_id: &ThreadId) -> Result<(), DomainError> {
        record(&self.calls, "verify_thread_by_id");
        match &self.thread {
            Some(row) if &row.id == thread_id => Ok(()),
            _ => Err(ErrorCode::ThreadNotFound.into()),
        }
    }

    async fn get_thread_by_id(
        &self,
        thread_id: &ThreadId,
    ) -> Result<Option<ThreadRow>, DomainError> {
        record(&self.calls, "get_thread_by_id");
        Ok(self.thread.clone().filter(|row| &row.id == thread_id))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Comments
// ════════════════════════════════════════════════════════════════════════════

pub struct MockCommentRepository {
    records: Vec<CommentRecord>,
    added: Mutex<Vec<Comment>>,
    deleted: Mutex<Vec<CommentId>>,
    calls: Mutex<Vec<String>>,
}

impl MockCommentRepository {
    pub fn new(records: Vec<CommentRecord>) -> Self {
        Self {
            records,
            added: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn added(&self) -> Vec<Comment> {
        self.added.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<CommentId> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn find(&self, comment_id: &CommentId) -> Option<&CommentRecord> {
        self.records.iter().find(|r| &r.id == comment_id)
    }
}

#[async_trait]
impl CommentRepository for MockCommentRepository {
    async fn add_comment(&self, comment: &Comment) -> Result<AddedComment, DomainError> {
        record(&self.calls, "add_comment");
        self.added.lock().unwrap().push(comment.clone());
        AddedComment::new("comment-123", comment.content(), comment.owner().as_str())
    }

    async fn verify_comment_by_thread_and_comment_id(
        &self,
        thread_id: &ThreadId,
        comment_id: &CommentId,
    ) -> Result<(), DomainError> {
        record(&self.calls, "verify_comment_by_thread_and_comment_id");
        match self.find(comment_id) {
            Some(r) if &r.thread_id == thread_id => Ok(()),
            _ => Err(ErrorCode::CommentNotFound.into()),
        }
    }

    async fn verify_comment_owner(
        &self,
        comment_id: &CommentId,
        owner: &UserId,
    ) -> Result<(), DomainError> {
        record(&self.calls, "verify_comment_owner");
        self.find(comment_id)
            .ok_or_else(|| DomainError::from_code(ErrorCode::CommentNotFound))?
            .check_ownership(owner, ErrorCode::CommentForbidden)
    }

    async fn find_comment_by_id(
        &self,
        comment_id: &CommentId,
    ) -> Result<Option<CommentRecord>, DomainError> {
        record(&self.calls, "find_comment_by_id");
        Ok(self.find(comment_id).cloned())
    }

    async fn delete_comment_by_id(&self, comment_id: &CommentId) -> Result<(), DomainError> {
        record(&self.calls, "delete_comment_by_id");
        self.deleted.lock().unwrap().push(comment_id.clone());
        Ok(())
    }

    async fn get_comments_by_thread_id(
        &self,
        thread_id: &ThreadId,
    ) -> Result<Vec<CommentRow>, DomainError> {
        record(&self.calls, "get_comments_by_thread_id");
        Ok(self
            .records
            .iter()
            .filter(|r| &r.thread_id == thread_id)
            .map(|r| CommentRow {
                id: r.id.clone(),
                username: r.owner.to_string(),
                date: r.created_at,
                content: r.content.clone(),
                is_deleted: r.is_deleted,
            })
            .collect())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Replies
// ════════════════════════════════════════════════════════════════════════════

pub struct MockReplyRepository {
    records: Vec<ReplyRecord>,
    added: Mutex<Vec<Reply>>,
    deleted: Mutex<Vec<ReplyId>>,
    requested: Mutex<Vec<Vec<CommentId>>>,
    calls: Mutex<Vec<String>>,
}

impl MockReplyRepository {
    pub fn new(records: Vec<ReplyRecord>) -> Self {
        Self {
            records,
            added: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
            requested: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn added(&self) -> Vec<Reply> {
        self.added.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<ReplyId> {
        self.deleted.lock().unwrap().clone()
    }

    /// Comment id batches passed to `get_replies_by_comment_ids`.
    pub fn requested(&self) -> Vec<Vec<CommentId>> {
        self.requested.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn find(&self, reply_id: &ReplyId) -> Option<&ReplyRecord> {
        self.records.iter().find(|r| &r.id == reply_id)
    }
}

#[async_trait]
impl ReplyRepository for MockReplyRepository {
    async fn add_reply(&self, reply: &Reply) -> Result<AddedReply, DomainError> {
        record(&self.calls, "add_reply");
        self.added.lock().unwrap().push(reply.clone());
        AddedReply::new("reply-123", reply.content(), reply.owner().as_str())
    }

    async fn verify_reply_by_id_and_comment_id(
        &self,
        reply_id: &ReplyId,
        comment_id: &CommentId,
    ) -> Result<(), DomainError> {
        record(&self.calls, "verify_reply_by_id_and_comment_id");
        match self.find(reply_id) {
            Some(r) if &r.comment_id == comment_id => Ok(()),
            _ => Err(ErrorCode::ReplyNotFound.into()),
        }
    }

    async fn verify_reply_owner(
        &self,
        reply_id: &ReplyId,
        owner: &UserId,
    ) -> Result<(), DomainError> {
        record(&self.calls, "verify_reply_owner");
        self.find(reply_id)
            .ok_or_else(|| DomainError::from_code(ErrorCode::ReplyNotFound))?
            .check_ownership(owner, ErrorCode::ReplyForbidden)
    }

    async fn soft_delete_reply_by_id(&self, reply_id: &ReplyId) -> Result<(), DomainError> {
        record(&self.calls, "soft_delete_reply_by_id");
        self.deleted.lock().unwrap().push(reply_id.clone());
        Ok(())
    }

    async fn get_replies_by_comment_ids(
        &self,
        comment_ids: &[CommentId],
    ) -> Result<Vec<ReplyRow>, DomainError> {
        record(&self.calls, "get_replies_by_comment_ids");
        self.requested.lock().unwrap().push(comment_ids.to_vec());
        Ok(self
            .records
            .iter()
            .filter(|r| comment_ids.contains(&r.comment_id))
            .map(|r| ReplyRow {
                id: r.id.clone(),
                comment_id: r.comment_id.clone(),
                username: r.owner.to_string(),
                date: r.created_at,
                content: r.content.clone(),
                is_deleted: r.is_deleted,
            })
            .collect())
    }
}
