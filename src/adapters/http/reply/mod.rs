//! HTTP adapter for reply endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ReplyHandlers;
pub use routes::reply_routes;
