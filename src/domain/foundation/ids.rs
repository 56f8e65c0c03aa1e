//! Strongly-typed identifier value objects.
//!
//! Identifiers are opaque strings of the form `<kind>-<suffix>`
//! (`thread-h7Qx...`, `comment-123`). The suffix is produced by an
//! `IdGenerator` adapter; the domain only guarantees non-emptiness.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident, $field:literal, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Prefix used when generating new identifiers of this kind.
            pub const PREFIX: &'static str = $prefix;

            /// Creates an identifier, returning error if empty.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(id))
            }

            /// Builds `<prefix>-<suffix>` from a generated suffix.
            pub fn with_suffix(suffix: &str) -> Self {
                Self(format!("{}-{}", Self::PREFIX, suffix))
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Unique identifier for a discussion thread.
    ThreadId, "thread_id", "thread"
);

string_id!(
    /// Unique identifier for a comment on a thread.
    CommentId, "comment_id", "comment"
);

string_id!(
    /// Unique identifier for a reply to a comment.
    ReplyId, "reply_id", "reply"
);

string_id!(
    /// Identifier of a registered user, as carried by access tokens.
    UserId, "user_id", "user"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_accepts_non_empty_string() {
        let id = UserId::new("user-123").unwrap();
        assert_eq!(id.as_str(), "user-123");
    }

    #[test]
    fn user_id_rejects_empty_string() {
        let result = UserId::new("");
        match result {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "user_id"),
            _ => panic!("Expected EmptyField error"),
        }
    }

    #[test]
    fn with_suffix_prepends_kind() {
        assert_eq!(ThreadId::with_suffix("abc").as_str(), "thread-abc");
        assert_eq!(CommentId::with_suffix("abc").as_str(), "comment-abc");
        assert_eq!(ReplyId::with_suffix("abc").as_str(), "reply-abc");
    }

    #[test]
    fn comment_id_parses_from_str() {
        let id: CommentId = "comment-123".parse().unwrap();
        assert_eq!(id.to_string(), "comment-123");
    }

    #[test]
    fn ids_serialize_transparently() {
        let id = ReplyId::new("reply-1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"reply-1\"");
    }
}
