//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, payload fields, errors, translator)
//! - `thread` - Threads and the assembled thread detail
//! - `comment` - Comments on threads, with redaction of deleted content
//! - `reply` - Replies on comments, with redaction of deleted content

pub mod comment;
pub mod foundation;
pub mod reply;
pub mod thread;
