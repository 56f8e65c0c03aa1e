//! In-memory forum store implementing all three repository ports.
//!
//! Records are kept in insertion order, which doubles as creation order.
//! Usernames are resolved like an inner join: rows whose owner has not been
//! registered through [`InMemoryForumStore::with_user`] are left out of
//! detail reads.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::comment::{AddedComment, Comment, CommentRecord, CommentRow};
use crate::domain::foundation::{
    CommentId, DomainError, ErrorCode, OwnedByUser, ReplyId, ThreadId, Timestamp, UserId,
};
use crate::domain::reply::{AddedReply, Reply, ReplyRecord, ReplyRow};
use crate::domain::thread::{AddedThread, NewThread, ThreadRow};
use crate::ports::{CommentRepository, IdGenerator, ReplyRepository, ThreadRepository};

#[derive(Debug, Clone)]
struct ThreadRecord {
    id: ThreadId,
    title: String,
    body: String,
    owner: UserId,
    created_at: Timestamp,
}

#[derive(Default)]
struct ForumState {
    users: HashMap<UserId, String>,
    threads: Vec<ThreadRecord>,
    comments: Vec<CommentRecord>,
    replies: Vec<ReplyRecord>,
}

/// In-memory implementation of the forum repositories.
pub struct InMemoryForumStore {
    state: RwLock<ForumState>,
    id_generator: Arc<dyn IdGenerator>,
}

impl InMemoryForumStore {
    pub fn new(id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { state: RwLock::new(ForumState::default()), id_generator }
    }

    /// Registers a username for detail reads while building the store.
    ///
    /// # Errors
    ///
    /// - `INTERNAL_ERROR` if `id` is empty or the store lock is poisoned
    pub fn with_user(
        self,
        id: impl Into<String>,
        username: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let user_id = UserId::new(id)
            .map_err(|e| DomainError::new(ErrorCode::InternalError, e.to_string()))?;
        self.register_user(user_id, username)?;
        Ok(self)
    }

    /// Registers a username on a shared store.
    pub fn register_user(&self, id: UserId, username: impl Into<String>) -> Result<(), DomainError> {
        self.write()?.users.insert(id, username.into());
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, ForumState>, DomainError> {
        self.state
            .read()
            .map_err(|_| DomainError::new(ErrorCode::InternalError, "Forum store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, ForumState>, DomainError> {
        self.state
            .write()
            .map_err(|_| DomainError::new(ErrorCode::InternalError, "Forum store lock poisoned"))
    }
}

impl ForumState {
    fn comment(&self, comment_id: &CommentId) -> Option<&CommentRecord> {
        self.comments.iter().find(|c| &c.id == comment_id)
    }

    fn reply(&self, reply_id: &ReplyId) -> Option<&ReplyRecord> {
        self.replies.iter().find(|r| &r.id == reply_id)
    }

    fn username(&self, owner: &UserId) -> Option<String> {
        self.users.get(owner).cloned()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Threads
// ════════════════════════════════════════════════════════════════════════════

#[async_trait]
impl ThreadRepository for InMemoryForumStore {
    async fn add_thread(&self, thread: &NewThread) -> Result<AddedThread, DomainError> {
        let record = ThreadRecord {
            id: ThreadId::with_suffix(&self.id_generator.generate()),
            title: thread.title().to_string(),
            body: thread.body().to_string(),
            owner: thread.owner().clone(),
            created_at: Timestamp::now(),
        };
        let added = AddedThread::new(record.id.as_str(), &record.title, record.owner.as_str())?;
        self.write()?.threads.push(record);
        Ok(added)
    }

    async fn verify_thread_by_id(&self, thread_id: &ThreadId) -> Result<(), DomainError> {
        if self.read()?.threads.iter().any(|t| &t.id == thread_id) {
            Ok(())
        } else {
            Err(DomainError::from_code(ErrorCode::ThreadNotFound)
                .with_detail("thread_id", thread_id.to_string()))
        }
    }

    async fn get_thread_by_id(
        &self,
        thread_id: &ThreadId,
    ) -> Result<Option<ThreadRow>, DomainError> {
        let state = self.read()?;
        Ok(state.threads.iter().find(|t| &t.id == thread_id).and_then(|t| {
            state.username(&t.owner).map(|username| ThreadRow {
                id: t.id.clone(),
                title: t.title.clone(),
                body: t.body.clone(),
                date: t.created_at,
                username,
            })
        }))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Comments
// ════════════════════════════════════════════════════════════════════════════

#[async_trait]
impl CommentRepository for InMemoryForumStore {
    async fn add_comment(&self, comment: &Comment) -> Result<AddedComment, DomainError> {
        let record = CommentRecord {
            id: CommentId::with_suffix(&self.id_generator.generate()),
            content: comment.content().to_string(),
            owner: comment.owner().clone(),
            thread_id: comment.thread_id().clone(),
            created_at: Timestamp::now(),
            is_deleted: false,
        };
        let added = AddedComment::new(record.id.as_str(), &record.content, record.owner.as_str())?;
        self.write()?.comments.push(record);
        Ok(added)
    }

    async fn verify_comment_by_thread_and_comment_id(
        &self,
        thread_id: &ThreadId,
        comment_id: &CommentId,
    ) -> Result<(), DomainError> {
        match self.read()?.comment(comment_id) {
            Some(c) if &c.thread_id == thread_id => Ok(()),
            _ => Err(DomainError::from_code(ErrorCode::CommentNotFound)
                .with_detail("thread_id", thread_id.to_string())
                .with_detail("comment_id", comment_id.to_string())),
        }
    }

    async fn verify_comment_owner(
        &self,
        comment_id: &CommentId,
        owner: &UserId,
    ) -> Result<(), DomainError> {
        self.read()?
            .comment(comment_id)
            .ok_or_else(|| DomainError::from_code(ErrorCode::CommentNotFound))?
            .check_ownership(owner, ErrorCode::CommentForbidden)
    }

    async fn find_comment_by_id(
        &self,
        comment_id: &CommentId,
    ) -> Result<Option<CommentRecord>, DomainError> {
        Ok(self.read()?.comment(comment_id).cloned())
    }

    async fn delete_comment_by_id(&self, comment_id: &CommentId) -> Result<(), DomainError> {
        let mut state = self.write()?;
        if let Some(comment) = state.comments.iter_mut().find(|c| &c.id == comment_id) {
            comment.is_deleted = true;
        }
        Ok(())
    }

    async fn get_comments_by_thread_id(
        &self,
        thread_id: &ThreadId,
    ) -> Result<Vec<CommentRow>, DomainError> {
        let state = self.read()?;
        Ok(state
            .comments
            .iter()
            .filter(|c| &c.thread_id == thread_id)
            .filter_map(|c| {
                state.username(&c.owner).map(|username| CommentRow {
                    id: c.id.clone(),
                    username,
                    date: c.created_at,
                    content: c.content.clone(),
                    is_deleted: c.is_deleted,
                })
            })
            .collect())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Replies
// ════════════════════════════════════════════════════════════════════════════

#[async_trait]
impl ReplyRepository for InMemoryForumStore {
    async fn add_reply(&self, reply: &Reply) -> Result<AddedReply, DomainError> {
        let record = ReplyRecord {
            id: ReplyId::with_suffix(&self.id_generator.generate()),
            content: reply.content().to_string(),
            owner: reply.owner().clone(),
            comment_id: reply.comment_id().clone(),
            created_at: Timestamp::now(),
            is_deleted: false,
        };
        let added = AddedReply::new(record.id.as_str(), &record.content, record.owner.as_str())?;
        self.write()?.replies.push(record);
        Ok(added)
    }

    async fn verify_reply_by_id_and_comment_id(
        &self,
        reply_id: &ReplyId,
        comment_id: &CommentId,
    ) -> Result<(), DomainError> {
        match self.read()?.reply(reply_id) {
            Some(r) if &r.comment_id == comment_id => Ok(()),
            _ => Err(DomainError::from_code(ErrorCode::ReplyNotFound)
                .with_detail("reply_id", reply_id.to_string())
                .with_detail("comment_id", comment_id.to_string())),
        }
    }

    async fn verify_reply_owner(
        &self,
        reply_id: &ReplyId,
        owner: &UserId,
    ) -> Result<(), DomainError> {
        self.read()?
            .reply(reply_id)
            .ok_or_else(|| DomainError::from_code(ErrorCode::ReplyNotFound))?
            .check_ownership(owner, ErrorCode::ReplyForbidden)
    }

    async fn soft_delete_reply_by_id(&self, reply_id: &ReplyId) -> Result<(), DomainError> {
        let mut state = self.write()?;
        if let Some(reply) = state.replies.iter_mut().find(|r| &r.id == reply_id) {
            reply.is_deleted = true;
        }
        Ok(())
    }

    async fn get_replies_by_comment_ids(
        &self,
        comment_ids: &[CommentId],
    ) -> Result<Vec<ReplyRow>, DomainError> {
        let state = self.read()?;
        Ok(state
            .replies
            .iter()
            .filter(|r| comment_ids.contains(&r.comment_id))
            .filter_map(|r| {
                state.username(&r.owner).map(|username| ReplyRow {
                    id: r.id.clone(),
                    comment_id: r.comment_id.clone(),
                    username,
                    date: r.created_at,
                    content: r.content.clone(),
                    is_deleted: r.is_deleted,
                })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::comment::CommentPayload;
    use crate::domain::foundation::payload::text;
    use crate::domain::reply::ReplyPayload;
    use crate::domain::thread::NewThreadPayload;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct SequentialIds(AtomicUsize);

    impl IdGenerator for SequentialIds {
        fn generate(&self) -> String {
            (self.0.fetch_add(1, Ordering::SeqCst) + 1).to_string()
        }
    }

    fn store() -> InMemoryForumStore {
        InMemoryForumStore::new(Arc::new(SequentialIds(AtomicUsize::new(0))))
            .with_user("user-123", "dicoding")
            .and_then(|store| store.with_user("user-456", "johndoe"))
            .unwrap()
    }

    async fn seed_thread(store: &InMemoryForumStore) -> ThreadId {
        let thread = NewThread::new(NewThreadPayload {
            title: text("sebuah thread"),
            body: text("isi thread"),
            owner: text("user-123"),
        })
        .unwrap();
        store.add_thread(&thread).await.unwrap().id().clone()
    }

    async fn seed_comment(store: &InMemoryForumStore, thread_id: &ThreadId, owner: &str) -> CommentId {
        let comment = Comment::new(CommentPayload {
            content: text("sebuah comment"),
            owner: text(owner),
            thread_id: text(thread_id.as_str()),
        })
        .unwrap();
        store.add_comment(&comment).await.unwrap().id().clone()
    }

    #[tokio::test]
    async fn generated_ids_carry_kind_prefix() {
        let store = store();
        let thread_id = seed_thread(&store).await;
        let comment_id = seed_comment(&store, &thread_id, "user-456").await;

        assert_eq!(thread_id.as_str(), "thread-1");
        assert_eq!(comment_id.as_str(), "comment-2");
    }

    #[tokio::test]
    async fn thread_row_resolves_username() {
        let store = store();
        let thread_id = seed_thread(&store).await;

        let row = store.get_thread_by_id(&thread_id).await.unwrap().unwrap();

        assert_eq!(row.username, "dicoding");
        assert_eq!(row.title, "sebuah thread");
        assert!(store.get_thread_by_id(&ThreadId::new("thread-x").unwrap()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn verify_thread_reports_missing_thread() {
        let store = store();
        let err = store.verify_thread_by_id(&ThreadId::new("thread-x").unwrap()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ThreadNotFound);
    }

    #[tokio::test]
    async fn comment_soft_delete_keeps_content() {
        let store = store();
        let thread_id = seed_thread(&store).await;
        let comment_id = seed_comment(&store, &thread_id, "user-456").await;

        store.delete_comment_by_id(&comment_id).await.unwrap();

        let record = store.find_comment_by_id(&comment_id).await.unwrap().unwrap();
        assert!(record.is_deleted);
        assert_eq!(record.content, "sebuah comment");
    }

    #[tokio::test]
    async fn comment_owner_check_uses_stored_owner() {
        let store = store();
        let thread_id = seed_thread(&store).await;
        let comment_id = seed_comment(&store, &thread_id, "user-456").await;

        assert!(store
            .verify_comment_owner(&comment_id, &UserId::new("user-456").unwrap())
            .await
            .is_ok());
        let err = store
            .verify_comment_owner(&comment_id, &UserId::new("user-123").unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CommentForbidden);
    }

    #[tokio::test]
    async fn comment_must_belong_to_thread() {
        let store = store();
        let thread_id = seed_thread(&store).await;
        let comment_id = seed_comment(&store, &thread_id, "user-456").await;

        let err = store
            .verify_comment_by_thread_and_comment_id(&ThreadId::new("thread-x").unwrap(), &comment_id)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CommentNotFound);
    }

    #[tokio::test]
    async fn replies_are_batched_in_creation_order() {
        let store = store();
        let thread_id = seed_thread(&store).await;
        let first = seed_comment(&store, &thread_id, "user-123").await;
        let second = seed_comment(&store, &thread_id, "user-456").await;

        for (comment_id, owner) in [(&second, "user-123"), (&first, "user-456"), (&second, "user-456")] {
            let reply = Reply::new(ReplyPayload {
                content: text("balasan"),
                owner: text(owner),
                comment_id: text(comment_id.as_str()),
                thread_id: text(thread_id.as_str()),
            })
            .unwrap();
            store.add_reply(&reply).await.unwrap();
        }

        let rows = store.get_replies_by_comment_ids(&[first.clone(), second.clone()]).await.unwrap();
        let order: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(order, vec!["reply-4", "reply-5", "reply-6"]);
        assert!(store.get_replies_by_comment_ids(&[]).await.unwrap().is_empty());
    }

    #[test]
    fn with_user_rejects_empty_id() {
        let err = InMemoryForumStore::new(Arc::new(SequentialIds(AtomicUsize::new(0))))
            .with_user("", "ghost")
            .err()
            .unwrap();
        assert_eq!(err.code, ErrorCode::InternalError);
    }

    #[tokio::test]
    async fn unknown_owner_is_left_out_of_detail_reads() {
        let store = store();
        let thread_id = seed_thread(&store).await;
        seed_comment(&store, &thread_id, "user-789").await;

        assert!(store.get_comments_by_thread_id(&thread_id).await.unwrap().is_empty());

        store.register_user(UserId::new("user-789").unwrap(), "newcomer").unwrap();
        let rows = store.get_comments_by_thread_id(&thread_id).await.unwrap();
        assert_eq!(rows[0].username, "newcomer");
    }
}
