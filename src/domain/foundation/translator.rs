//! Translation of domain error codes into user-facing client errors.
//!
//! The table is built once on first use and never mutated. Codes that are
//! not in it (infrastructure failures, corrupt persisted rows) come back
//! untouched so the boundary can answer with a generic 500.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use thiserror::Error;

use super::{DomainError, ErrorCode};

/// Category of a client-facing error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientErrorKind {
    /// Malformed or missing input (400).
    Invariant,
    /// Referenced resource does not exist (404).
    NotFound,
    /// Caller is not allowed to act on the resource (403).
    Authorization,
}

impl ClientErrorKind {
    /// HTTP status code for this kind.
    pub fn status_code(&self) -> u16 {
        match self {
            ClientErrorKind::Invariant => 400,
            ClientErrorKind::NotFound => 404,
            ClientErrorKind::Authorization => 403,
        }
    }
}

impl fmt::Display for ClientErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClientErrorKind::Invariant => "InvariantError",
            ClientErrorKind::NotFound => "NotFoundError",
            ClientErrorKind::Authorization => "AuthorizationError",
        };
        f.write_str(s)
    }
}

/// An error safe to show to the caller, with a localized message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ClientError {
    pub kind: ClientErrorKind,
    pub message: &'static str,
}

impl ClientError {
    const fn invariant(message: &'static str) -> Self {
        Self { kind: ClientErrorKind::Invariant, message }
    }

    const fn not_found(message: &'static str) -> Self {
        Self { kind: ClientErrorKind::NotFound, message }
    }

    const fn authorization(message: &'static str) -> Self {
        Self { kind: ClientErrorKind::Authorization, message }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }
}

/// Outcome of translating a [`DomainError`].
#[derive(Debug, Clone)]
pub enum TranslatedError {
    /// The code is known; show this to the caller.
    Client(ClientError),
    /// The code is not in the table; the original error, unchanged.
    Unrecognized(DomainError),
}

static DIRECTORY: Lazy<HashMap<ErrorCode, ClientError>> = Lazy::new(|| {
    use ErrorCode::*;

    HashMap::from([
        (
            NewThreadMissingProperty,
            ClientError::invariant(
                "tidak dapat membuat thread baru karena properti yang dibutuhkan tidak ada",
            ),
        ),
        (
            NewThreadInvalidType,
            ClientError::invariant("tidak dapat membuat thread karena tipe data tidak sesuai"),
        ),
        (
            CommentMissingProperty,
            ClientError::invariant(
                "tidak dapat membuat komentar baru karena properti yang dibutuhkan tidak ada",
            ),
        ),
        (
            CommentInvalidType,
            ClientError::invariant(
                "tidak dapat membuat komentar baru karena tipe data tidak sesuai",
            ),
        ),
        (
            ReplyMissingProperty,
            ClientError::invariant(
                "tidak dapat membuat balasan baru karena properti yang dibutuhkan tidak ada",
            ),
        ),
        (
            ReplyInvalidType,
            ClientError::invariant("tidak dapat membuat balasan baru karena tipe data tidak sesuai"),
        ),
        (
            AddCommentThreadNotFound,
            ClientError::not_found(
                "Tidak dapat membuat komentar, thread tidak ada (threadId tidak valid)",
            ),
        ),
        (
            DeleteCommentMissingCommentId,
            ClientError::invariant("harus mengirimkan commentId"),
        ),
        (
            DeleteCommentInvalidPayload,
            ClientError::invariant("commentId dan owner harus string"),
        ),
        (
            DeleteCommentThreadNotFound,
            ClientError::not_found("komentar yang hendak dihapus tidak ada, threadId tidak valid"),
        ),
        (
            DeleteCommentNotFound,
            ClientError::not_found("komentar yang hendak dihapus tidak ada, commentId tidak valid"),
        ),
        (
            DeleteCommentForbidden,
            ClientError::authorization(
                "tidak dapat menghapus komentar, anda tidak berhak menghapus komentar ini",
            ),
        ),
        (
            DeleteReplyMissingProperty,
            ClientError::invariant(
                "tidak dapat menghapus balasan karena properti yang dibutuhkan tidak ada",
            ),
        ),
        (
            DeleteReplyInvalidType,
            ClientError::invariant("tidak dapat menghapus balasan karena tipe data tidak sesuai"),
        ),
        (
            GetDetailThreadNotFound,
            ClientError::not_found("thread tidak ditemukan"),
        ),
        (ThreadNotFound, ClientError::not_found("thread tidak ditemukan")),
        (CommentNotFound, ClientError::not_found("komentar tidak ditemukan")),
        (
            CommentForbidden,
            ClientError::authorization("akses ditolak user bukan pemilik komentar"),
        ),
        (ReplyNotFound, ClientError::not_found("reply tidak ditemukan")),
        (
            ReplyForbidden,
            ClientError::authorization("akses ditolak user bukan pemilik reply"),
        ),
    ])
});

/// Maps domain error codes to client errors.
pub struct DomainErrorTranslator;

impl DomainErrorTranslator {
    /// Looks up the client error registered for `code`.
    pub fn lookup(code: ErrorCode) -> Option<&'static ClientError> {
        DIRECTORY.get(&code)
    }

    /// Looks up a raw token such as `COMMENT.NOT_CONTAIN_NEEDED_PROPERTY`.
    pub fn lookup_token(token: &str) -> Option<&'static ClientError> {
        token.parse::<ErrorCode>().ok().and_then(Self::lookup)
    }

    /// Translates an error, passing unknown codes through unchanged.
    pub fn translate(error: DomainError) -> TranslatedError {
        match Self::lookup(error.code) {
            Some(client) => TranslatedError::Client(client.clone()),
            None => TranslatedError::Unrecognized(error),
        }
    }

    /// Codes with a registered translation.
    pub fn known_codes() -> impl Iterator<Item = ErrorCode> {
        DIRECTORY.keys().copied()
    }
}
