//! Lookup endpoint handler.

use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use crate::http::request::medicine_name_from_body;
use crate::http::server::AppState;
use crate::lookup::{LookupError, LookupOutcome, LookupService};
use crate::observability::metrics;

/// `POST /get_medicine_info`
pub async fn get_medicine_info(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let start_time = Instant::now();

    let response = match lookup(&state.service, body) {
        Ok(outcome) => outcome.into_response(),
        Err(e) => {
            match &e {
                LookupError::DatasetUnavailable { reason } => {
                    tracing::error!(reason = %reason, "Lookup rejected: dataset unavailable");
                }
                LookupError::SchemaMismatch { column } => {
                    tracing::error!(column = %column, "Lookup rejected: dataset schema mismatch");
                }
                LookupError::Internal(details) => {
                    tracing::error!(details = %details, "Lookup failed");
                }
                LookupError::MissingInput => tracing::debug!("Lookup rejected: empty query"),
            }
            e.into_response()
        }
    };

    metrics::record_lookup(response.status().as_u16(), start_time);
    response
}

/// Availability is checked before the body so an unavailable dataset is
/// reported ahead of any decoding problem.
fn lookup(
    service: &LookupService,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<LookupOutcome<'_>, LookupError> {
    service.ensure_available()?;
    let query = medicine_name_from_body(body)?;
    service.find_medicine(&query)
}
