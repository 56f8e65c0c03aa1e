//! HTTP routes for thread endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_thread, post_thread, ThreadHandlers};

/// `POST /threads` - start a thread. Must sit behind the auth middleware.
pub fn thread_routes(handlers: ThreadHandlers) -> Router {
    Router::new().route("/threads", post(post_thread)).with_state(handlers)
}

/// `GET /threads/:thread_id` - thread detail with comments and replies.
/// Public; tokens on these requests are never inspected.
pub fn public_thread_routes(handlers: ThreadHandlers) -> Router {
    Router::new().route("/threads/:thread_id", get(get_thread)).with_state(handlers)
}
