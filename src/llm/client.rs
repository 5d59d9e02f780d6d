use anyhow::{bail, Context, Result};
use serde_json::{json, Value};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Gemini `generateContent` REST API.
///
/// The generation service is an opaque collaborator: one call per request,
/// bounded by the client timeout, never retried. A missing API key is
/// reported on the first call rather than at startup so the rest of the
/// service stays usable without one.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, base_url: String, model: String) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            http,
            api_key,
            base_url,
            model,
        }
    }

    pub async fn generate(&self, prompt: &str, max_output_tokens: u32) -> Result<String> {
        let Some(api_key) = self.api_key.as_deref() else {
            bail!("generation client not configured");
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );
        let body = json!({
            "contents": [{"parts": [{"text": prompt}]}],
            "generationConfig": {
                "maxOutputTokens": max_output_tokens,
                "temperature": 0.2,
            },
        });

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .context("send generation request")?;
        let status = response.status();
        let payload = response.text().await.context("read generation response")?;
        if !status.is_success() {
            bail!("generation API error: {} {}", status, payload);
        }

        extract_candidate_text(&payload)
    }
}

/// Pulls the generated text out of a `generateContent` response payload.
///
/// Joins the part texts of all candidates with newlines; a payload with no
/// non-empty text anywhere is an error.
pub fn extract_candidate_text(payload: &str) -> Result<String> {
    let value: Value = serde_json::from_str(payload).context("parse generation response JSON")?;

    let mut chunks = Vec::new();
    if let Some(candidates) = value.get("candidates").and_then(Value::as_array) {
        for candidate in candidates {
            let Some(parts) = candidate.pointer("/content/parts").and_then(Value::as_array) else {
                continue;
            };
            for part in parts {
                if let Some(text) = part.get("text").and_then(Value::as_str) {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        chunks.push(trimmed.to_string());
                    }
                }
            }
        }
    }

    if chunks.is_empty() {
        bail!("generation response missing text");
    }
    Ok(chunks.join("\n"))
}
