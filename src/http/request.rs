//! Request handling.
//!
//! # Responsibilities
//! - Generate unique request ID (UUID v4) when the client sent none
//! - Decode the lookup body into a query string
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - A missing or null `medicine_name` is an empty query, not a decode error

use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderValue, Request};
use axum::Json;
use serde_json::Value;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::lookup::LookupError;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Body field holding the query.
pub const MEDICINE_NAME_FIELD: &str = "medicine_name";

/// Generates a fresh UUID v4 for every request lacking an ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV4;

impl MakeRequestId for MakeRequestUuidV4 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = HeaderValue::from_str(&Uuid::new_v4().to_string()).ok()?;
        Some(RequestId::new(id))
    }
}

/// Extract the raw `medicine_name` from a lookup body.
///
/// Undecodable bodies and non-object or non-string payloads are internal
/// errors carrying the failure as details.
pub fn medicine_name_from_body(body: Result<Json<Value>, JsonRejection>) -> Result<String, LookupError> {
    let Json(value) = body.map_err(|rejection| LookupError::Internal(rejection.body_text()))?;

    let fields = value.as_object().ok_or_else(|| {
        LookupError::Internal(format!("expected a JSON object, got {}", json_kind(&value)))
    })?;

    match fields.get(MEDICINE_NAME_FIELD) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(name)) => Ok(name.clone()),
        Some(other) => Err(LookupError::Internal(format!(
            "'{MEDICINE_NAME_FIELD}' must be a string, got {}",
            json_kind(other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_field_extracted() {
        let name = medicine_name_from_body(Ok(Json(json!({"medicine_name": " Para "})))).unwrap();
        assert_eq!(name, " Para ");
    }

    #[test]
    fn test_missing_or_null_field_is_empty() {
        assert_eq!(medicine_name_from_body(Ok(Json(json!({})))).unwrap(), "");
        assert_eq!(
            medicine_name_from_body(Ok(Json(json!({"medicine_name": null})))).unwrap(),
            ""
        );
    }

    #[test]
    fn test_non_string_field_is_internal() {
        let err = medicine_name_from_body(Ok(Json(json!({"medicine_name": 42})))).unwrap_err();
        assert_eq!(
            err,
            LookupError::Internal("'medicine_name' must be a string, got number".into())
        );
    }

    #[test]
    fn test_non_object_body_is_internal() {
        let err = medicine_name_from_body(Ok(Json(json!(["para"])))).unwrap_err();
        assert_eq!(err.details(), Some("expected a JSON object, got array"));
    }

    #[test]
    fn test_request_ids_are_unique() {
        let request = Request::builder().body(()).unwrap();
        let mut make = MakeRequestUuidV4;

        let a = make.make_request_id(&request).unwrap();
        let b = make.make_request_id(&request).unwrap();
        assert_ne!(a.header_value(), b.header_value());
        assert!(Uuid::parse_str(a.header_value().to_str().unwrap()).is_ok());
    }
}
