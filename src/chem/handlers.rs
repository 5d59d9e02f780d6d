use crate::llm::types::{collaborator_error, validation_error};
use axum::extract::Query;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Extension;
use serde::Deserialize;

const CACTUS_BASE_URL: &str = "https://cactus.nci.nih.gov/chemical/structure";
const SDF_CONTENT_TYPE: &str = "chemical/x-mdl-sdfile";

#[derive(Deserialize)]
pub struct SmilesParams {
    pub smiles: Option<String>,
}

/// `GET /smiles/view?smiles=...` — fetches the SDF rendition of a SMILES
/// string from the CACTUS resolver and passes it through verbatim.
pub async fn handle_smiles_view(
    Query(params): Query<SmilesParams>,
    Extension(http): Extension<reqwest::Client>,
) -> Response {
    let Some(smiles) = params.smiles.filter(|s| !s.is_empty()) else {
        return validation_error("smiles query parameter required");
    };

    let url = format!("{}/{}/sdf", CACTUS_BASE_URL, urlencoding::encode(&smiles));
    let sdf = match fetch_sdf(&http, &url).await {
        Ok(sdf) => sdf,
        Err(err) => {
            tracing::error!("CACTUS fetch failed: {}", err);
            return collaborator_error(format!("failed to fetch SDF: {}", err));
        }
    };

    ([(header::CONTENT_TYPE, SDF_CONTENT_TYPE)], sdf).into_response()
}

async fn fetch_sdf(http: &reqwest::Client, url: &str) -> Result<String, reqwest::Error> {
    let response = http.get(url).send().await?.error_for_status()?;
    response.text().await
}
