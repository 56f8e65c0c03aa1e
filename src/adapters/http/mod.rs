//! HTTP adapters - REST API implementations.
//!
//! Each forum area has its own module with DTOs, handlers and routes.
//! [`api_router`] puts the mutating routes behind the auth middleware and
//! merges the public ones outside it.

pub mod comment;
pub mod envelope;
pub mod error;
pub mod health;
pub mod middleware;
pub mod reply;
pub mod thread;

use std::sync::Arc;
use std::time::Duration;

use axum::{http::HeaderValue, middleware::from_fn_with_state, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::application::handlers::{
    AddCommentHandler, AddReplyHandler, AddThreadHandler, DeleteCommentHandler,
    DeleteReplyHandler, GetDetailThreadHandler,
};
use crate::ports::{CommentRepository, ReplyRepository, ThreadRepository};

pub use comment::{comment_routes, CommentHandlers};
pub use health::health_routes;
pub use middleware::{auth_middleware, AuthState, RequireAuth};
pub use reply::{reply_routes, ReplyHandlers};
pub use thread::{public_thread_routes, thread_routes, ThreadHandlers};

/// Handler state for every forum area.
#[derive(Clone)]
pub struct ForumHandlers {
    pub threads: ThreadHandlers,
    pub comments: CommentHandlers,
    pub replies: ReplyHandlers,
}

impl ForumHandlers {
    /// Wires every use case against the given repositories.
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        reply_repository: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self {
            threads: ThreadHandlers::new(
                Arc::new(AddThreadHandler::new(thread_repository.clone())),
                Arc::new(GetDetailThreadHandler::new(
                    thread_repository.clone(),
                    comment_repository.clone(),
                    reply_repository.clone(),
                )),
            ),
            comments: CommentHandlers::new(
                Arc::new(AddCommentHandler::new(thread_repository.clone(), comment_repository.clone())),
                Arc::new(DeleteCommentHandler::new(thread_repository, comment_repository.clone())),
            ),
            replies: ReplyHandlers::new(
                Arc::new(AddReplyHandler::new(comment_repository.clone(), reply_repository.clone())),
                Arc::new(DeleteReplyHandler::new(comment_repository, reply_repository)),
            ),
        }
    }
}

/// Builds the forum API with request tracing.
///
/// Only the mutating routes run the auth middleware. The thread detail and
/// health routes are merged after the layer, so a stale token sent to them
/// is ignored.
pub fn api_router(handlers: ForumHandlers, auth: AuthState) -> Router {
    let authenticated = Router::new()
        .merge(thread_routes(handlers.threads.clone()))
        .merge(comment_routes(handlers.comments))
        .merge(reply_routes(handlers.replies))
        .layer(from_fn_with_state(auth, auth_middleware));

    authenticated
        .merge(public_thread_routes(handlers.threads))
        .merge(health_routes())
        .layer(TraceLayer::new_for_http())
}

/// Adds CORS and a request timeout. An empty origin list allows any origin.
pub fn with_service_layers(router: Router, cors_origins: &[String], timeout: Duration) -> Router {
    let cors = if cors_origins.is_empty() {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = cors_origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        CorsLayer::new().allow_origin(origins)
    };

    router
        .layer(cors.allow_methods(Any).allow_headers(Any))
        .layer(TimeoutLayer::new(timeout))
}
