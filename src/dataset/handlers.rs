use super::store::DatasetStore;
use super::types::DatasetSearchResponse;
use crate::search::engine::retrieve;
use axum::extract::Query;
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

const SEARCH_TOP_K: usize = 20;

#[derive(Deserialize)]
pub struct DatasetSearchParams {
    pub q: Option<String>,
}

/// `GET /dataset/search` — keyword search over the publication dataset.
///
/// Omitting `q` (or passing it empty) returns the full dataset unfiltered.
pub async fn handle_dataset_search(
    Query(params): Query<DatasetSearchParams>,
    Extension(store): Extension<Arc<DatasetStore>>,
) -> Json<DatasetSearchResponse> {
    let results = match params.q.as_deref() {
        Some(q) if !q.is_empty() => retrieve(store.all(), q, SEARCH_TOP_K),
        _ => store.all().to_vec(),
    };

    Json(DatasetSearchResponse { results })
}
