//! Ownership trait for user-owned resources.
//!
//! Comments and replies are owned by the user who created them. Ownership
//! is immutable and is the only key checked before a soft delete.

use super::{DomainError, ErrorCode, UserId};

/// Trait for records that have a single owner.
pub trait OwnedByUser {
    /// Returns the ID of the user who owns this resource.
    fn owner_id(&self) -> &UserId;

    /// Checks if the given user is the owner.
    fn is_owner(&self, user_id: &UserId) -> bool {
        self.owner_id() == user_id
    }

    /// Validates ownership, failing with `code` if the user is not the owner.
    ///
    /// Repository adapters pass their own forbidden code so the translator
    /// can pick the right message.
    fn check_ownership(&self, user_id: &UserId, code: ErrorCode) -> Result<(), DomainError> {
        if self.is_owner(user_id) {
            Ok(())
        } else {
            Err(DomainError::from_code(code)
                .with_detail("owner_id", self.owner_id().to_string())
                .with_detail("requested_by", user_id.to_string()))
        }
    }
}
