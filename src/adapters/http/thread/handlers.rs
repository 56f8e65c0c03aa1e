//! HTTP handlers for thread endpoints.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::envelope::{JsonObject, SuccessResponse};
use crate::adapters::http::error::handle_domain_error;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::thread::{
    AddThreadCommand, AddThreadHandler, GetDetailThreadHandler, GetDetailThreadQuery,
};
use crate::domain::foundation::payload::text;
use crate::domain::foundation::{DomainError, ErrorCode, ThreadId};

use super::dto::{AddThreadData, ThreadDetailData};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ThreadHandlers {
    add_handler: Arc<AddThreadHandler>,
    detail_handler: Arc<GetDetailThreadHandler>,
}

impl ThreadHandlers {
    pub fn new(add_handler: Arc<AddThreadHandler>, detail_handler: Arc<GetDetailThreadHandler>) -> Self {
        Self { add_handler, detail_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /threads
pub async fn post_thread(
    State(handlers): State<ThreadHandlers>,
    RequireAuth(user): RequireAuth,
    body: Bytes,
) -> Response {
    let payload = JsonObject::parse(&body);
    let cmd = AddThreadCommand {
        title: payload.field("title"),
        body: payload.field("body"),
        owner: text(user.id.as_str()),
    };

    match handlers.add_handler.handle(cmd).await {
        Ok(added) => {
            let data = AddThreadData { added_thread: added.into() };
            (StatusCode::CREATED, Json(SuccessResponse::new(data))).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}

/// GET /threads/:thread_id
pub async fn get_thread(
    State(handlers): State<ThreadHandlers>,
    Path(thread_id): Path<String>,
) -> Response {
    let thread_id = match ThreadId::new(thread_id) {
        Ok(id) => id,
        Err(_) => return handle_domain_error(DomainError::from_code(ErrorCode::GetDetailThreadNotFound)),
    };

    match handlers.detail_handler.handle(GetDetailThreadQuery { thread_id }).await {
        Ok(thread) => {
            let data = ThreadDetailData { thread: (&thread).into() };
            (StatusCode::OK, Json(SuccessResponse::new(data))).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}
