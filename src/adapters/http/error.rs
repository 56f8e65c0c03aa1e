//! Mapping of domain errors to HTTP responses.
//!
//! This is the single place where error codes become status codes. Codes
//! the translator does not know are logged and answered with a generic 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::envelope::ErrorResponse;
use crate::domain::foundation::{DomainError, DomainErrorTranslator, TranslatedError};

/// Converts a domain error into a response with the matching status.
pub fn handle_domain_error(error: DomainError) -> Response {
    match DomainErrorTranslator::translate(error) {
        TranslatedError::Client(client) => {
            let status =
                StatusCode::from_u16(client.status_code()).unwrap_or(StatusCode::BAD_REQUEST);
            tracing::debug!(kind = %client.kind, status = %status, "Client error");
            (status, Json(ErrorResponse::fail(client.message))).into_response()
        }
        TranslatedError::Unrecognized(error) => {
            tracing::error!(
                code = %error.code,
                message = %error.message,
                details = ?error.details,
                "Unhandled error"
            );
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::server_error())).into_response()
        }
    }
}
