//! Comment domain - comments posted on threads.

mod detail;
mod entities;

pub use detail::{CommentRow, DetailComment, COMMENT_REDACTION_MARKER};
pub use entities::{AddedComment, Comment, CommentPayload, CommentRecord};
