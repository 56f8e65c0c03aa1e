//! Thread repository port.
//!
//! Persists new threads and serves the thread row used by the detail view.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ThreadId};
use crate::domain::thread::{AddedThread, NewThread, ThreadRow};

/// Repository port for threads.
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Persist a new thread under a freshly generated id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn add_thread(&self, thread: &NewThread) -> Result<AddedThread, DomainError>;

    /// Succeeds only if the thread exists.
    ///
    /// # Errors
    ///
    /// - `ThreadNotFound` if no thread has this id
    /// - `DatabaseError` on persistence failure
    async fn verify_thread_by_id(&self, thread_id: &ThreadId) -> Result<(), DomainError>;

    /// Find a thread joined with its owner's username.
    ///
    /// Returns `None` if not found.
    async fn get_thread_by_id(&self, thread_id: &ThreadId)
        -> Result<Option<ThreadRow>, DomainError>;
}
