//! JSON response envelopes shared by every endpoint.
//!
//! ```text
//! 2xx  {"status":"success","data":{...}}
//! 4xx  {"status":"fail","message":"..."}
//! 5xx  {"status":"error","message":"terjadi kegagalan pada server kami"}
//! ```

use axum::body::Bytes;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::foundation::Field;

/// Message shown for every unexpected failure.
pub const SERVER_ERROR_MESSAGE: &str = "terjadi kegagalan pada server kami";

/// Successful response carrying data.
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub status: &'static str,
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self { status: "success", data }
    }
}

/// Successful response without data.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self { status: "success" }
    }
}

/// Failure response with a human-readable message.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl ErrorResponse {
    /// A client error (4xx).
    pub fn fail(message: impl Into<String>) -> Self {
        Self { status: "fail", message: message.into() }
    }

    /// A server error (5xx). Internal detail is never exposed.
    pub fn server_error() -> Self {
        Self { status: "error", message: SERVER_ERROR_MESSAGE.to_string() }
    }
}

/// Request body parsed as a loose JSON object.
///
/// Anything that is not a JSON object (empty body, malformed JSON, an
/// array) is read as an empty object so entity validation reports the
/// missing properties.
#[derive(Debug, Default)]
pub struct JsonObject(Map<String, Value>);

impl JsonObject {
    pub fn parse(body: &Bytes) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => Self(map),
            _ => Self::default(),
        }
    }

    /// The named property, `None` when absent.
    pub fn field(&self, key: &str) -> Field {
        self.0.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_wraps_data() {
        let body = serde_json::to_value(SuccessResponse::new(json!({"x": 1}))).unwrap();
        assert_eq!(body, json!({"status": "success", "data": {"x": 1}}));
    }

    #[test]
    fn server_error_hides_details() {
        let body = serde_json::to_value(ErrorResponse::server_error()).unwrap();
        assert_eq!(body, json!({"status": "error", "message": SERVER_ERROR_MESSAGE}));
    }

    #[test]
    fn parses_object_fields() {
        let object = JsonObject::parse(&Bytes::from_static(br#"{"title":"a","n":1}"#));
        assert_eq!(object.field("title"), Some(json!("a")));
        assert_eq!(object.field("n"), Some(json!(1)));
        assert_eq!(object.field("body"), None);
    }

    #[test]
    fn malformed_or_non_object_body_is_empty() {
        assert_eq!(JsonObject::parse(&Bytes::from_static(b"{not json")).field("title"), None);
        assert_eq!(JsonObject::parse(&Bytes::from_static(b"[1,2]")).field("title"), None);
        assert_eq!(JsonObject::parse(&Bytes::new()).field("title"), None);
    }
}
