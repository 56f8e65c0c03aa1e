//! Write-side thread entities.

use crate::domain::foundation::payload::{all_text, all_truthy, as_text};
use crate::domain::foundation::{DomainError, ErrorCode, Field, ThreadId, UserId};

/// Untrusted input for a new thread.
#[derive(Debug, Clone, Default)]
pub struct NewThreadPayload {
    pub title: Field,
    pub body: Field,
    pub owner: Field,
}

/// A validated thread ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThread {
    title: String,
    body: String,
    owner: UserId,
}

impl NewThread {
    /// Validates the payload.
    ///
    /// # Errors
    ///
    /// - `NEW_THREAD.NOT_CONTAIN_NEEDED_PROPERTY` if any field is missing or falsy
    /// - `NEW_THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION` if any field is not a string
    pub fn new(payload: NewThreadPayload) -> Result<Self, DomainError> {
        let NewThreadPayload { title, body, owner } = payload;

        if !all_truthy(&[&title, &body, &owner]) {
            return Err(ErrorCode::NewThreadMissingProperty.into());
        }
        if !all_text(&[&title, &body, &owner]) {
            return Err(ErrorCode::NewThreadInvalidType.into());
        }

        Ok(Self {
            title: as_text(&title).unwrap_or_default().to_string(),
            body: as_text(&body).unwrap_or_default().to_string(),
            owner: UserId::new(as_text(&owner).unwrap_or_default())
                .map_err(|_| DomainError::from_code(ErrorCode::NewThreadMissingProperty))?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }
}

/// Minimal echo of a stored thread returned after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedThread {
    id: ThreadId,
    title: String,
    owner: UserId,
}

impl AddedThread {
    /// # Errors
    ///
    /// - `ADDED_THREAD.NOT_CONTAIN_NEEDED_PROPERTY` if id, title or owner is empty
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        owner: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        let missing = |_| DomainError::from_code(ErrorCode::AddedThreadMissingProperty);
        let id = ThreadId::new(id).map_err(missing)?;
        let owner = UserId::new(owner).map_err(missing)?;
        if title.is_empty() {
            return Err(ErrorCode::AddedThreadMissingProperty.into());
        }
        Ok(Self { id, title, owner })
    }

    pub fn id(&self) -> &ThreadId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }
}
