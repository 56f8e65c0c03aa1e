//! HTTP handlers for comment endpoints.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::envelope::{JsonObject, StatusResponse, SuccessResponse};
use crate::adapters::http::error::handle_domain_error;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::comment::{
    AddCommentCommand, AddCommentHandler, DeleteCommentCommand, DeleteCommentHandler,
};
use crate::domain::foundation::payload::text;

use super::dto::AddCommentData;

#[derive(Clone)]
pub struct CommentHandlers {
    add_handler: Arc<AddCommentHandler>,
    delete_handler: Arc<DeleteCommentHandler>,
}

impl CommentHandlers {
    pub fn new(add_handler: Arc<AddCommentHandler>, delete_handler: Arc<DeleteCommentHandler>) -> Self {
        Self { add_handler, delete_handler }
    }
}

/// POST /threads/:thread_id/comments
pub async fn post_comment(
    State(handlers): State<CommentHandlers>,
    RequireAuth(user): RequireAuth,
    Path(thread_id): Path<String>,
    body: Bytes,
) -> Response {
    let payload = JsonObject::parse(&body);
    let cmd = AddCommentCommand {
        content: payload.field("content"),
        owner: text(user.id.as_str()),
        thread_id: text(thread_id),
    };

    match handlers.add_handler.handle(cmd).await {
        Ok(added) => {
            let data = AddCommentData { added_comment: added.into() };
            (StatusCode::CREATED, Json(SuccessResponse::new(data))).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}

/// DELETE /threads/:thread_id/comments/:comment_id
pub async fn delete_comment(
    State(handlers): State<CommentHandlers>,
    RequireAuth(user): RequireAuth,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> Response {
    let cmd = DeleteCommentCommand {
        comment_id: text(comment_id),
        owner: text(user.id.as_str()),
        thread_id: text(thread_id),
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => (StatusCode::OK, Json(StatusResponse::success())).into_response(),
        Err(e) => handle_domain_error(e),
    }
}
