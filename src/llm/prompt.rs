use crate::dataset::types::DatasetRecord;
use serde_json::Value;
use std::fmt::Write;
use std::path::Path;

/// Hard cap on embedded document text, in characters.
pub const DOCUMENT_CHAR_LIMIT: usize = 20_000;

/// The system preamble prepended to every generated prompt.
///
/// Loaded once at startup from a JSON file with `role` and `name` fields,
/// joined with a newline. Any read or parse failure degrades to an empty
/// preamble; prompt assembly must keep working without one.
pub struct SystemPrompt(String);

impl SystemPrompt {
    pub fn load(path: &Path) -> Self {
        let text = std::fs::read_to_string(path)
            .ok()
            .and_then(|raw| serde_json::from_str::<Value>(&raw).ok())
            .map(|v| {
                format!(
                    "{}\n{}",
                    v.get("role").and_then(Value::as_str).unwrap_or(""),
                    v.get("name").and_then(Value::as_str).unwrap_or("")
                )
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            tracing::warn!("No system prompt loaded from {}", path.display());
        }
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[cfg(test)]
    pub fn from_text(text: &str) -> Self {
        Self(text.to_string())
    }
}

/// Composes the final prompt handed to the generation collaborator.
///
/// Layout: system preamble, a `Dataset hits:` header with one
/// `- {title} ({link})` line per hit in order, an optional `PDF TEXT:` block
/// truncated to the first [`DOCUMENT_CHAR_LIMIT`] characters, and the
/// instruction block last. Beyond the document cap the content is opaque;
/// no further budget is enforced here.
pub fn assemble(
    system_prompt: &str,
    hits: &[DatasetRecord],
    document_text: Option<&str>,
    instruction: &str,
) -> String {
    let mut prompt = String::new();
    prompt.push_str(system_prompt);
    prompt.push_str("\nDataset hits:\n");
    for hit in hits {
        // write! to a String cannot fail.
        let _ = writeln!(prompt, "- {} ({})", hit.title, hit.link);
    }
    if let Some(text) = document_text {
        prompt.push_str("PDF TEXT:\n");
        prompt.extend(text.chars().take(DOCUMENT_CHAR_LIMIT));
        prompt.push('\n');
    }
    prompt.push_str(instruction);
    prompt
}
