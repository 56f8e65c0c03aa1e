//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresThreadRepository` - threads joined with owner usernames
//! - `PostgresCommentRepository` - comments, ownership, soft delete
//! - `PostgresReplyRepository` - replies, ownership, soft delete, batched reads
//!
//! The schema lives in `migrations/` at the crate root.

mod comment_repository;
mod reply_repository;
mod thread_repository;

pub use comment_repository::PostgresCommentRepository;
pub use reply_repository::PostgresReplyRepository;
pub use thread_repository::PostgresThreadRepository;

/// Embedded schema migrations.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
