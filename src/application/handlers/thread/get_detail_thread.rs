//! GetDetailThreadHandler - Query handler assembling a thread with its
//! comments and replies.
//!
//! Replies for every comment are fetched in a single batch and grouped by
//! comment id in one pass, so their creation order survives grouping.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::comment::DetailComment;
use crate::domain::foundation::{CommentId, DomainError, ErrorCode, ThreadId};
use crate::domain::reply::{DetailReply, ReplyRow};
use crate::domain::thread::DetailThread;
use crate::ports::{CommentRepository, ReplyRepository, ThreadRepository};

/// Query for a single thread's detail view.
#[derive(Debug, Clone)]
pub struct GetDetailThreadQuery {
    pub thread_id: ThreadId,
}

/// Handler for reading a thread's detail view.
pub struct GetDetailThreadHandler {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
}

impl GetDetailThreadHandler {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        reply_repository: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self { thread_repository, comment_repository, reply_repository }
    }

    pub async fn handle(&self, query: GetDetailThreadQuery) -> Result<DetailThread, DomainError> {
        let thread = self
            .thread_repository
            .get_thread_by_id(&query.thread_id)
            .await?
            .ok_or_else(|| {
                DomainError::from_code(ErrorCode::GetDetailThreadNotFound)
                    .with_detail("thread_id", query.thread_id.to_string())
            })?;

        let comments = self.comment_repository.get_comments_by_thread_id(&thread.id).await?;

        let comment_ids: Vec<CommentId> = comments.iter().map(|c| c.id.clone()).collect();
        let replies = if comment_ids.is_empty() {
            Vec::new()
        } else {
            self.reply_repository.get_replies_by_comment_ids(&comment_ids).await?
        };

        debug!(
            thread_id = %thread.id,
            comments = comments.len(),
            replies = replies.len(),
            "Assembling thread detail"
        );

        let mut grouped = group_replies_by_comment(replies);
        let detail_comments = comments
            .into_iter()
            .map(|row| {
                let replies = grouped
                    .remove(&row.id)
                    .map(|rows| {
                        rows.into_iter()
                            .map(DetailReply::new)
                            .collect::<Result<Vec<_>, DomainError>>()
                    })
                    .transpose()?;
                DetailComment::new(row, replies)
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        DetailThread::new(thread, Some(detail_comments))
    }
}

/// Groups a flat reply list by comment id, keeping scan order per group.
fn group_replies_by_comment(replies: Vec<ReplyRow>) -> HashMap<CommentId, Vec<ReplyRow>> {
    let mut grouped: HashMap<CommentId, Vec<ReplyRow>> = HashMap::new();
    for reply in replies {
        grouped.entry(reply.comment_id.clone()).or_default().push(reply);
    }
    grouped
}
