//! Error types for the domain layer.
//!
//! Every failure raised by an entity constructor, a handler, or a repository
//! adapter is a [`DomainError`] tagged with an [`ErrorCode`]. The code renders
//! as the wire token (e.g. `DELETE_COMMENT_USE_CASE.FORBIDDEN_AUTHORIZATION`)
//! that the [`DomainErrorTranslator`](super::DomainErrorTranslator) keys on.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }
}

macro_rules! error_codes {
    ($( $(#[$doc:meta])* $variant:ident => $token:literal, )+) => {
        /// Error codes, one per wire token.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ErrorCode {
            $( $(#[$doc])* $variant, )+
        }

        impl ErrorCode {
            /// Every known code, in declaration order.
            pub const ALL: &'static [ErrorCode] = &[ $( ErrorCode::$variant, )+ ];

            /// Returns the wire token for this code.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( ErrorCode::$variant => $token, )+
                }
            }
        }

        impl FromStr for ErrorCode {
            type Err = UnknownErrorCode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $token => Ok(ErrorCode::$variant), )+
                    other => Err(UnknownErrorCode(other.to_string())),
                }
            }
        }
    };
}

error_codes! {
    // Entity validation
    NewThreadMissingProperty => "NEW_THREAD.NOT_CONTAIN_NEEDED_PROPERTY",
    NewThreadInvalidType => "NEW_THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION",
    AddedThreadMissingProperty => "ADDED_THREAD.NOT_CONTAIN_NEEDED_PROPERTY",
    DetailThreadMissingProperty => "DETAIL_THREAD.NOT_CONTAIN_NEEDED_PROPERTY",
    CommentMissingProperty => "COMMENT.NOT_CONTAIN_NEEDED_PROPERTY",
    CommentInvalidType => "COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION",
    AddedCommentMissingProperty => "ADDED_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY",
    DetailCommentMissingProperty => "DETAIL_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY",
    ReplyMissingProperty => "REPLY.NOT_CONTAIN_NEEDED_PROPERTY",
    ReplyInvalidType => "REPLY.NOT_MEET_DATA_TYPE_SPECIFICATION",
    AddedReplyMissingProperty => "ADDED_REPLY.NOT_CONTAIN_NEEDED_PROPERTY",
    DetailReplyMissingProperty => "DETAIL_REPLY.NOT_CONTAIN_NEEDED_PROPERTY",

    // Use cases
    AddCommentThreadNotFound => "ADD_COMMENT_USE_CASE.THREAD_NOT_FOUND",
    DeleteCommentMissingCommentId => "DELETE_COMMENT_USE_CASE.NOT_CONTAIN_COMMENT_ID",
    DeleteCommentInvalidPayload => "DELETE_COMMENT_USE_CASE.PAYLOAD_NOT_MEET_DATA_TYPE_SPECIFICATION",
    DeleteCommentThreadNotFound => "DELETE_COMMENT_USE_CASE.THREAD_NOT_FOUND",
    /// Translator entry only; the comment repository raises `CommentNotFound`.
    DeleteCommentNotFound => "DELETE_COMMENT_USE_CASE.COMMENT_NOT_FOUND",
    /// Translator entry only; the comment repository raises `CommentForbidden`.
    DeleteCommentForbidden => "DELETE_COMMENT_USE_CASE.FORBIDDEN_AUTHORIZATION",
    DeleteReplyMissingProperty => "DELETE_REPLY_USE_CASE.NOT_CONTAIN_NEEDED_PROPERTY",
    DeleteReplyInvalidType => "DELETE_REPLY_USE_CASE.NOT_MEET_DATA_TYPE_SPECIFICATION",
    GetDetailThreadNotFound => "GET_DETAIL_THREAD_USE_CASE.THREAD_NOT_FOUND",

    // Repository verification
    ThreadNotFound => "THREAD_REPOSITORY.THREAD_NOT_FOUND",
    CommentNotFound => "COMMENT_REPOSITORY.COMMENT_NOT_FOUND",
    CommentForbidden => "COMMENT_REPOSITORY.FORBIDDEN_AUTHORIZATION",
    ReplyNotFound => "REPLY_REPOSITORY.REPLY_NOT_FOUND",
    ReplyForbidden => "REPLY_REPOSITORY.FORBIDDEN_AUTHORIZATION",

    // Infrastructure errors
    DatabaseError => "DATABASE_ERROR",
    InternalError => "INTERNAL_ERROR",
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a token that no [`ErrorCode`] renders as.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown error code: {0}")]
pub struct UnknownErrorCode(pub String);

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates an error whose message is the code's own token.
    pub fn from_code(code: ErrorCode) -> Self {
        Self::new(code, code.as_str())
    }

    /// Creates a database error wrapping an adapter failure.
    pub fn database(context: &str, err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::DatabaseError, format!("{}: {}", context, err))
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl From<ErrorCode> for DomainError {
    fn from(code: ErrorCode) -> Self {
        Self::from_code(code)
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
