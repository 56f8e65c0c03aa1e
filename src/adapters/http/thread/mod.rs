//! HTTP adapter for thread endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ThreadHandlers;
pub use routes::{public_thread_routes, thread_routes};
