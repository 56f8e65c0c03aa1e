//! Comment handlers.

mod add_comment;
mod delete_comment;

pub use add_comment::{AddCommentCommand, AddCommentHandler};
pub use delete_comment::{DeleteCommentCommand, DeleteCommentHandler};
