use axum::http::Method;
use serde_json::Value;
use std::collections::HashMap;

pub const DEFAULT_TOP_K: usize = 5;

/// The normalized query parameters shared by every free-text endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParams {
    pub query: String,
    pub top_k: usize,
}

/// Extracts `(query, top_k)` from a request regardless of transport shape.
///
/// Read-style requests (GET/HEAD) use the query string: `q` first, then
/// `query`, else empty; `top_k` from the parameter of that name. Write-style
/// requests try a JSON object body first, then a form-encoded body with the
/// same field names; if both fail the query is empty and `top_k` defaults.
///
/// A missing or non-numeric `top_k` never fails the request, it falls back
/// to [`DEFAULT_TOP_K`]. Only an empty query after all fallbacks is a
/// validation failure, and that is the caller's check.
pub fn normalize(method: &Method, query_pairs: &HashMap<String, String>, body: &[u8]) -> QueryParams {
    if method == Method::GET || method == Method::HEAD {
        let query = query_pairs
            .get("q")
            .or_else(|| query_pairs.get("query"))
            .cloned()
            .unwrap_or_default();
        let top_k = query_pairs
            .get("top_k")
            .and_then(|raw| parse_top_k_str(raw))
            .unwrap_or(DEFAULT_TOP_K);
        return QueryParams { query, top_k };
    }

    if let Ok(Value::Object(payload)) = serde_json::from_slice::<Value>(body) {
        let query = payload
            .get("query")
            .or_else(|| payload.get("q"))
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        let top_k = parse_top_k(payload.get("top_k")).unwrap_or(DEFAULT_TOP_K);
        return QueryParams { query, top_k };
    }

    if let Ok(form) = serde_urlencoded::from_bytes::<HashMap<String, String>>(body) {
        let query = form
            .get("query")
            .or_else(|| form.get("q"))
            .cloned()
            .unwrap_or_default();
        let top_k = form
            .get("top_k")
            .and_then(|raw| parse_top_k_str(raw))
            .unwrap_or(DEFAULT_TOP_K);
        return QueryParams { query, top_k };
    }

    QueryParams {
        query: String::new(),
        top_k: DEFAULT_TOP_K,
    }
}

/// Accepts a JSON number or a numeric string; negatives clamp to zero.
fn parse_top_k(value: Option<&Value>) -> Option<usize> {
    match value? {
        Value::Number(n) => n.as_i64().map(clamp_non_negative),
        Value::String(s) => parse_top_k_str(s),
        _ => None,
    }
}

fn parse_top_k_str(raw: &str) -> Option<usize> {
    raw.trim().parse::<i64>().ok().map(clamp_non_negative)
}

fn clamp_non_negative(value: i64) -> usize {
    value.max(0) as usize
}
