use super::correlation::{correlation_matrix, parse_arrays};
use crate::llm::types::validation_error;
use axum::body::Bytes;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

/// `POST /graph/correlation` — Pearson correlation matrix of the supplied
/// numeric arrays.
///
/// The body is decoded by hand so an undecodable payload maps to the fixed
/// `invalid json` message rather than the framework's rejection body.
pub async fn handle_graph_correlation(body: Bytes) -> Response {
    let payload: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(_) => return validation_error("invalid json"),
    };

    let rows = match parse_arrays(&payload) {
        Ok(rows) => rows,
        Err(message) => return validation_error(message),
    };

    let corr = correlation_matrix(&rows);
    Json(json!({ "corr": corr })).into_response()
}
