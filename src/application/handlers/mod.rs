//! Application handlers.
//!
//! One command or query handler per forum action. Handlers never catch
//! errors; every failure propagates to the HTTP layer unchanged.

pub mod comment;
pub mod reply;
pub mod thread;

#[cfg(test)]
pub(crate) mod test_support;

pub use comment::{AddCommentCommand, AddCommentHandler, DeleteCommentCommand, DeleteCommentHandler};
pub use reply::{AddReplyCommand, AddReplyHandler, DeleteReplyCommand, DeleteReplyHandler};
pub use thread::{AddThreadCommand, AddThreadHandler, GetDetailThreadHandler, GetDetailThreadQuery};
