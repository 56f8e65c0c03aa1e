//! HTTP adapter for comment endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::CommentHandlers;
pub use routes::comment_routes;
