use crate::dataset::store::DatasetStore;
use crate::llm::client::GeminiClient;
use crate::llm::prompt::{assemble, SystemPrompt};
use crate::llm::types::{
    answer_response, collaborator_error, validation_error, SummaryResponse,
};
use crate::search::engine::retrieve;
use axum::extract::Multipart;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

const QUESTION_HITS: usize = 6;
const QUESTION_MAX_TOKENS: u32 = 800;
const SUMMARY_MAX_TOKENS: u32 = 400;

/// `POST /pdf/question` — answer a question against an uploaded PDF,
/// augmented with dataset hits for the question text.
pub async fn handle_pdf_question(
    Extension(store): Extension<Arc<DatasetStore>>,
    Extension(system_prompt): Extension<Arc<SystemPrompt>>,
    Extension(client): Extension<Arc<GeminiClient>>,
    multipart: Multipart,
) -> Response {
    let upload = match read_upload(multipart).await {
        Ok(upload) => upload,
        Err(response) => return response,
    };
    let question = upload.question;
    let Some(file) = upload.file.filter(|_| !question.is_empty()) else {
        return validation_error("file and question are required");
    };

    let pdf_text = match pdf_extract::extract_text_from_mem(&file) {
        Ok(text) => text,
        Err(err) => {
            tracing::error!("PDF text extraction failed: {}", err);
            return collaborator_error(format!("failed to extract PDF text: {}", err));
        }
    };

    let hits = retrieve(store.all(), &question, QUESTION_HITS);
    let instruction = format!(
        "QUESTION:\n{}\nAnswer using the PDF text and dataset hits. Provide sources where appropriate.",
        question
    );
    let prompt = assemble(system_prompt.as_str(), &hits, Some(&pdf_text), &instruction);

    let result = client.generate(&prompt, QUESTION_MAX_TOKENS).await;
    if let Err(err) = &result {
        tracing::error!("Generation call failed: {}", err);
    }
    answer_response(result, hits)
}

/// `POST /pdf/summarize` — summarize an uploaded PDF.
pub async fn handle_pdf_summarize(
    Extension(system_prompt): Extension<Arc<SystemPrompt>>,
    Extension(client): Extension<Arc<GeminiClient>>,
    multipart: Multipart,
) -> Response {
    let upload = match read_upload(multipart).await {
        Ok(upload) => upload,
        Err(response) => return response,
    };
    let Some(file) = upload.file else {
        return validation_error("file is required");
    };

    let pdf_text = match pdf_extract::extract_text_from_mem(&file) {
        Ok(text) => text,
        Err(err) => {
            tracing::error!("PDF text extraction failed: {}", err);
            return collaborator_error(format!("failed to extract PDF text: {}", err));
        }
    };

    let prompt = assemble(
        system_prompt.as_str(),
        &[],
        Some(&pdf_text),
        "Summarize the PDF text above concisely (3-6 sentences).",
    );

    match client.generate(&prompt, SUMMARY_MAX_TOKENS).await {
        Ok(summary) => Json(SummaryResponse { summary }).into_response(),
        Err(err) => {
            tracing::error!("Generation call failed: {}", err);
            collaborator_error(err.to_string())
        }
    }
}

struct Upload {
    file: Option<Vec<u8>>,
    question: String,
}

/// Drains the multipart stream into the fields the PDF endpoints use.
/// Unknown fields are skipped; a malformed stream is a validation failure.
async fn read_upload(mut multipart: Multipart) -> Result<Upload, Response> {
    let mut upload = Upload {
        file: None,
        question: String::new(),
    };

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => return Err(validation_error(&format!("invalid multipart body: {}", err))),
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => match field.bytes().await {
                Ok(bytes) => upload.file = Some(bytes.to_vec()),
                Err(err) => {
                    return Err(validation_error(&format!("failed to read upload: {}", err)))
                }
            },
            "question" => {
                upload.question = field.text().await.unwrap_or_default();
            }
            _ => {}
        }
    }

    Ok(upload)
}
