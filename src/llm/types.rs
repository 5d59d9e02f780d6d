use crate::dataset::types::DatasetRecord;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub answer: String,
    pub hits: Vec<DatasetRecord>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hits: Option<Vec<DatasetRecord>>,
}

/// Maps a generation result plus the computed hits onto the external
/// contract: `{answer, hits}` on success, `{error, hits}` with a 500 on
/// collaborator failure so partial value is not discarded.
pub fn answer_response(result: anyhow::Result<String>, hits: Vec<DatasetRecord>) -> Response {
    match result {
        Ok(answer) => (StatusCode::OK, Json(AnswerResponse { answer, hits })).into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: err.to_string(),
                hits: Some(hits),
            }),
        )
            .into_response(),
    }
}

/// 400 response for a missing or invalid required input.
pub fn validation_error(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
            hits: None,
        }),
    )
        .into_response()
}

/// 500 response for a failed external collaborator call.
pub fn collaborator_error(message: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: message,
            hits: None,
        }),
    )
        .into_response()
}
