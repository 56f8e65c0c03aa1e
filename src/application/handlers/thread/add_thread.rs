//! AddThreadHandler - Command handler for starting a new thread.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, Field};
use crate::domain::thread::{AddedThread, NewThread, NewThreadPayload};
use crate::ports::ThreadRepository;

/// Command to start a thread. `owner` comes from the authenticated session.
#[derive(Debug, Clone, Default)]
pub struct AddThreadCommand {
    pub title: Field,
    pub body: Field,
    pub owner: Field,
}

/// Handler for creating threads.
pub struct AddThreadHandler {
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddThreadHandler {
    pub fn new(thread_repository: Arc<dyn ThreadRepository>) -> Self {
        Self { thread_repository }
    }

    pub async fn handle(&self, cmd: AddThreadCommand) -> Result<AddedThread, DomainError> {
        let new_thread = NewThread::new(NewThreadPayload {
            title: cmd.title,
            body: cmd.body,
            owner: cmd.owner,
        })?;

        let added = self.thread_repository.add_thread(&new_thread).await?;

        info!(thread_id = %added.id(), owner = %added.owner(), "Thread created");
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::MockThreadRepository;
    use crate::domain::foundation::payload::text;
    use crate::domain::foundation::ErrorCode;

    fn valid_command() -> AddThreadCommand {
        AddThreadCommand {
            title: text("sebuah thread"),
            body: text("isi thread"),
            owner: text("user-123"),
        }
    }

    #[tokio::test]
    async fn adds_thread_and_echoes_title_and_owner() {
        let repo = Arc::new(MockThreadRepository::empty());
        let handler = AddThreadHandler::new(repo.clone());

        let added = handler.handle(valid_command()).await.unwrap();

        assert!(!added.id().as_str().is_empty());
        assert_eq!(added.title(), "sebuah thread");
        assert_eq!(added.owner().as_str(), "user-123");

        let persisted = repo.added();
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0].body(), "isi thread");
    }

    #[tokio::test]
    async fn invalid_payload_never_reaches_repository() {
        let repo = Arc::new(MockThreadRepository::empty());
        let handler = AddThreadHandler::new(repo.clone());

        let cmd = AddThreadCommand { title: None, ..valid_command() };
        let err = handler.handle(cmd).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::NewThreadMissingProperty);
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn propagates_repository_failure() {
        let repo = Arc::new(MockThreadRepository::failing());
        let handler = AddThreadHandler::new(repo);

        let err = handler.handle(valid_command()).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
