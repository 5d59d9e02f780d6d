use super::types::DatasetRecord;
use anyhow::Result;
use std::path::Path;

const TITLE_COLUMN: &str = "Title";
const LINK_COLUMN: &str = "Link";

/// In-memory store for the publication dataset.
///
/// Populated once at startup and never mutated. A missing or malformed CSV
/// yields an empty store rather than a startup failure: availability of the
/// service outranks dataset completeness.
pub struct DatasetStore {
    records: Vec<DatasetRecord>,
}

impl DatasetStore {
    pub fn load(path: &Path) -> Self {
        match read_records(path) {
            Ok(records) => {
                tracing::info!("Loaded {} dataset records from {}", records.len(), path.display());
                Self { records }
            }
            Err(err) => {
                tracing::warn!("Failed to load dataset from {}: {}", path.display(), err);
                Self { records: Vec::new() }
            }
        }
    }

    pub fn all(&self) -> &[DatasetRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[cfg(test)]
    pub fn from_records(records: Vec<DatasetRecord>) -> Self {
        Self { records }
    }
}

fn read_records(path: &Path) -> Result<Vec<DatasetRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let title_idx = headers.iter().position(|h| h == TITLE_COLUMN);
    let link_idx = headers.iter().position(|h| h == LINK_COLUMN);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        // A row missing either column keeps an empty string for that field.
        records.push(DatasetRecord {
            title: column_value(&row, title_idx),
            link: column_value(&row, link_idx),
        });
    }
    Ok(records)
}

fn column_value(row: &csv::StringRecord, idx: Option<usize>) -> String {
    idx.and_then(|i| row.get(i)).unwrap_or_default().to_string()
}
