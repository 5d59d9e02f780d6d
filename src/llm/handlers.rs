use super::client::GeminiClient;
use super::params::normalize;
use super::prompt::{assemble, SystemPrompt};
use super::types::{answer_response, validation_error};
use crate::dataset::store::DatasetStore;
use crate::search::engine::retrieve;
use axum::body::Bytes;
use axum::extract::Query;
use axum::http::Method;
use axum::response::Response;
use axum::Extension;
use std::collections::HashMap;
use std::sync::Arc;

const ANSWER_MAX_TOKENS: u32 = 512;

/// Shared handler behind `/query` and `/llm`.
///
/// Both endpoints accept the same logical request as query-string
/// parameters, a JSON body, or a form body; the normalizer makes the
/// extraction identical across transports. An empty query after all
/// fallbacks is the only validation failure.
pub async fn handle_ask(
    method: Method,
    Query(query_pairs): Query<HashMap<String, String>>,
    Extension(store): Extension<Arc<DatasetStore>>,
    Extension(system_prompt): Extension<Arc<SystemPrompt>>,
    Extension(client): Extension<Arc<GeminiClient>>,
    body: Bytes,
) -> Response {
    let params = normalize(&method, &query_pairs, &body);
    if params.query.is_empty() {
        return validation_error("query required");
    }

    let hits = retrieve(store.all(), &params.query, params.top_k);
    let instruction = format!(
        "QUESTION:\n{}\nAnswer concisely and cite dataset hits when relevant.",
        params.query
    );
    let prompt = assemble(system_prompt.as_str(), &hits, None, &instruction);

    let result = client.generate(&prompt, ANSWER_MAX_TOKENS).await;
    if let Err(err) = &result {
        tracing::error!("Generation call failed: {}", err);
    }
    answer_response(result, hits)
}
