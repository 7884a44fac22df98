//! Response mapping.
//!
//! # Responsibilities
//! - Map lookup outcomes to 200 (records) or 404
//! - Map lookup errors to 400/500 with a JSON `error` body
//! - Attach `details` for unexpected failures

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::lookup::{LookupError, LookupOutcome};

/// Message returned with 404.
pub const NOT_FOUND_MESSAGE: &str = "No matching medicine found";

/// JSON body for every non-200 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}

impl LookupError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            LookupError::MissingInput => StatusCode::BAD_REQUEST,
            LookupError::DatasetUnavailable { .. }
            | LookupError::SchemaMismatch { .. }
            | LookupError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
            details: self.details().map(str::to_string),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

impl IntoResponse for LookupOutcome<'_> {
    fn into_response(self) -> Response {
        match self {
            LookupOutcome::Found(records) => (StatusCode::OK, Json(records)).into_response(),
            LookupOutcome::NotFound => {
                (StatusCode::NOT_FOUND, Json(ErrorBody::new(NOT_FOUND_MESSAGE))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(LookupError::MissingInput.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            LookupError::DatasetUnavailable { reason: "gone".into() }.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            LookupError::SchemaMismatch { column: "Uses".into() }.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_details_only_for_internal() {
        let json = serde_json::to_value(ErrorBody::new(NOT_FOUND_MESSAGE)).unwrap();
        assert_eq!(json, serde_json::json!({"error": "No matching medicine found"}));

        let response = LookupError::Internal("bad body".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_status() {
        let response = LookupOutcome::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
