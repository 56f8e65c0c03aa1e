//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, payload field helpers, ownership and
//! the error taxonomy that form the vocabulary of the forum domain.

mod auth;
mod errors;
mod ids;
mod ownership;
pub mod payload;
mod timestamp;
mod translator;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, UnknownErrorCode, ValidationError};
pub use ids::{CommentId, ReplyId, ThreadId, UserId};
pub use ownership::OwnedByUser;
pub use payload::Field;
pub use timestamp::Timestamp;
pub use translator::{ClientError, ClientErrorKind, DomainErrorTranslator, TranslatedError};
