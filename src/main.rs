use axum::extract::DefaultBodyLimit;
use axum::routing::{any, get, post};
use axum::{Extension, Router};
use publication_assistant::chem::handlers::handle_smiles_view;
use publication_assistant::config::Config;
use publication_assistant::dataset::handlers::handle_dataset_search;
use publication_assistant::dataset::store::DatasetStore;
use publication_assistant::graph::handlers::handle_graph_correlation;
use publication_assistant::llm::client::GeminiClient;
use publication_assistant::llm::handlers::handle_ask;
use publication_assistant::llm::prompt::SystemPrompt;
use publication_assistant::pdf::handlers::{handle_pdf_question, handle_pdf_summarize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

const UPLOAD_BODY_LIMIT: usize = 50 * 1024 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = Config::from_env()?;

    // Read-only process-wide state, built once and shared by reference.
    let store = Arc::new(DatasetStore::load(&config.dataset_csv));
    let system_prompt = Arc::new(SystemPrompt::load(&config.system_prompt_path));
    let client = Arc::new(GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_base_url.clone(),
        config.gemini_model.clone(),
    ));
    let http_client = reqwest::Client::new();

    if config.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY not set; generation endpoints will return errors");
    }
    if store.is_empty() {
        tracing::warn!("Serving with an empty dataset");
    }

    let mut app = Router::new()
        .route("/query", get(handle_ask).post(handle_ask))
        .route("/llm", any(handle_ask))
        .route("/dataset/search", get(handle_dataset_search))
        .route("/pdf/question", post(handle_pdf_question))
        .route("/pdf/summarize", post(handle_pdf_summarize))
        .route("/smiles/view", get(handle_smiles_view))
        .route("/graph/correlation", post(handle_graph_correlation))
        .layer(Extension(store))
        .layer(Extension(system_prompt))
        .layer(Extension(client))
        .layer(Extension(http_client))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
        .layer(CorsLayer::permissive());

    if let Some(dir) = &config.static_dir {
        // SPA fallback: unknown paths serve index.html for client routing.
        let spa = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
        app = app.fallback_service(spa);
        tracing::info!("Serving static files from {}", dir.display());
    }

    tracing::info!("Listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
