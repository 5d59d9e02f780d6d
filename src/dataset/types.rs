use serde::{Deserialize, Serialize};

/// A single publication entry from the source CSV.
///
/// Immutable after load. The collection keeps source order, which the
/// retrieval engine relies on as a tie-break for equal scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub title: String,
    pub link: String,
}

#[derive(Debug, Serialize)]
pub struct DatasetSearchResponse {
    pub results: Vec<DatasetRecord>,
}
