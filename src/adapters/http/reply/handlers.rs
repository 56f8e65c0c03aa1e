//! HTTP handlers for reply endpoints.

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
use crate::application::handlers::reply::{
    AddReplyCommand, AddReplyHandler, DeleteReplyCommand, DeleteReplyHandler,
};
use crate::domain::foundation::payload::text;

use super::dto::AddReplyData;

#[derive(Clone)]
pub struct ReplyHandlers {
    add_handler: Arc<AddReplyHandler>,
    delete_handler: Arc<DeleteReplyHandler>,
}

impl ReplyHandlers {
    pub fn new(add_handler: Arc<AddReplyHandler>, delete_handler: Arc<DeleteReplyHandler>) -> Self {
        Self { add_handler, delete_handler }
    }
}

/// POST /threads/:thread_id/comments/:comment_id/replies
pub async fn post_reply(
    State(handlers): State<ReplyHandlers>,
    RequireAuth(user): RequireAuth,
    Path((thread_id, comment_id)): Path<(String, String)>,
    body: Bytes,
) -> Response {
    let payload = JsonObject::parse(&body);
    let cmd = AddReplyCommand {
        content: payload.field("content"),
        owner: text(user.id.as_str()),
        comment_id: text(comment_id),
        thread_id: text(thread_id),
    };

    match handlers.add_handler.handle(cmd).await {
        Ok(added) => {
            let data = AddReplyData { added_reply: added.into() };
            (StatusCode::CREATED, Json(SuccessResponse::new(data))).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}

/// DELETE /threads/:thread_id/comments/:comment_id/replies/:reply_id
pub async fn delete_reply(
    State(handlers): State<ReplyHandlers>,
    RequireAuth(user): RequireAuth,
    Path((thread_id, comment_id, reply_id)): Path<(String, String, String)>,
) -> Response {
    let cmd = DeleteReplyCommand {
        reply_id: text(reply_id),
        owner: text(user.id.as_str()),
        comment_id: text(comment_id),
        thread_id: text(thread_id),
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => (StatusCode::OK, Json(StatusResponse::success())).into_response(),
        Err(e) => handle_domain_error(e),
    }
}
