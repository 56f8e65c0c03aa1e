//! HTTP routes for comment endpoints.

use axum::{
    routing::{delete, post},
    Router,
};

use super::handlers::{delete_comment, post_comment, CommentHandlers};

/// Creates the comment router. Both routes require authentication.
pub fn comment_routes(handlers: CommentHandlers) -> Router {
    Router::new()
        .route("/threads/:thread_id/comments", post(post_comment))
        .route("/threads/:thread_id/comments/:comment_id", delete(delete_comment))
        .with_state(handlers)
}
