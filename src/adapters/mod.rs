//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Access token validation (JWT, mock)
//! - `http` - axum routers, envelopes and middleware
//! - `id` - Identifier suffix generation
//! - `memory` - In-memory repositories
//! - `postgres` - PostgreSQL repositories and migrations

pub mod auth;
pub mod http;
pub mod id;
pub mod memory;
pub mod postgres;

pub use auth::{JwtSessionValidator, MockSessionValidator};
pub use id::UuidIdGenerator;
pub use memory::InMemoryForumStore;
pub use postgres::{PostgresCommentRepository, PostgresReplyRepository, PostgresThreadRepository};
