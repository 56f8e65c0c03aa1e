//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the use cases and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `ThreadRepository` - threads and the thread detail row
//! - `CommentRepository` - comments, ownership checks, soft delete
//! - `ReplyRepository` - replies, ownership checks, soft delete, batched reads
//!
//! ## Infrastructure Ports
//!
//! - `IdGenerator` - unique identifier suffixes
//! - `SessionValidator` - access token validation

mod comment_repository;
mod id_generator;
mod reply_repository;
mod session_validator;
mod thread_repository;

pub use comment_repository::CommentRepository;
pub use id_generator::IdGenerator;
pub use reply_repository::ReplyRepository;
pub use session_validator::SessionValidator;
pub use thread_repository::ThreadRepository;

pub use crate::domain::comment::{CommentRecord, CommentRow};
pub use crate::domain::reply::{ReplyRecord, ReplyRow};
pub use crate::domain::thread::ThreadRow;
