//! Reply domain - replies posted on comments.

mod detail;
mod entities;

pub use detail::{DetailReply, ReplyRow, REPLY_REDACTION_MARKER};
pub use entities::{AddedReply, Reply, ReplyPayload, ReplyRecord};
