//! Dataset Module Tests
//!
//! Validates CSV loading, the empty-on-failure policy, and the search endpoint.
//!
//! ## Test Scopes
//! - **Store**: Row mapping, column fallbacks, load-failure degradation.
//! - **Handler**: Unfiltered listing vs. filtered retrieval.

#[cfg(test)]
mod tests {
    use crate::dataset::handlers::{handle_dataset_search, DatasetSearchParams};
    use crate::dataset::store::DatasetStore;
    use crate::dataset::types::DatasetRecord;
    use axum::extract::Query;
    use axum::Extension;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;

    fn write_temp_csv(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("dataset_store_{}_{}.csv", name, std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    // ============================================================
    // STORE TESTS
    // ============================================================

    #[test]
    fn test_load_missing_file_yields_empty_store() {
        let store = DatasetStore::load(Path::new("/nonexistent/publications.csv"));
        assert!(store.is_empty());
        assert!(store.all().is_empty());
    }

    #[test]
    fn test_load_maps_title_and_link_columns() {
        let path = write_temp_csv(
            "basic",
            "Title,Link\nGene Expression Study,https://example.org/1\nMicrogravity Effects,https://example.org/2\n",
        );
        let store = DatasetStore::load(&path);
        std::fs::remove_file(&path).ok();

        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].title, "Gene Expression Study");
        assert_eq!(store.all()[0].link, "https://example.org/1");
        // Source order is preserved.
        assert_eq!(store.all()[1].title, "Microgravity Effects");
    }

    #[test]
    fn test_load_missing_link_column_defaults_to_empty() {
        let path = write_temp_csv("no_link", "Title\nOnly Titles Here\n");
        let store = DatasetStore::load(&path);
        std::fs::remove_file(&path).ok();

        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].title, "Only Titles Here");
        assert_eq!(store.all()[0].link, "");
    }

    #[test]
    fn test_load_ignores_extra_columns() {
        let path = write_temp_csv(
            "extra",
            "Id,Title,Year,Link\n7,Radiation Biology,2020,https://example.org/r\n",
        );
        let store = DatasetStore::load(&path);
        std::fs::remove_file(&path).ok();

        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].title, "Radiation Biology");
        assert_eq!(store.all()[0].link, "https://example.org/r");
    }

    // ============================================================
    // HANDLER TESTS
    // ============================================================

    fn sample_store() -> Arc<DatasetStore> {
        Arc::new(DatasetStore::from_records(vec![
            DatasetRecord {
                title: "Gene Expression Study A".to_string(),
                link: "https://example.org/a".to_string(),
            },
            DatasetRecord {
                title: "Unrelated Title".to_string(),
                link: "https://example.org/b".to_string(),
            },
        ]))
    }

    #[tokio::test]
    async fn test_search_without_query_returns_full_dataset() {
        let response =
            handle_dataset_search(Query(DatasetSearchParams { q: None }), Extension(sample_store()))
                .await;
        assert_eq!(response.0.results.len(), 2);
    }

    #[tokio::test]
    async fn test_search_with_empty_query_returns_full_dataset() {
        let response = handle_dataset_search(
            Query(DatasetSearchParams { q: Some(String::new()) }),
            Extension(sample_store()),
        )
        .await;
        assert_eq!(response.0.results.len(), 2);
    }

    #[tokio::test]
    async fn test_search_with_query_filters_results() {
        let response = handle_dataset_search(
            Query(DatasetSearchParams { q: Some("gene expression".to_string()) }),
            Extension(sample_store()),
        )
        .await;
        assert_eq!(response.0.results.len(), 1);
        assert_eq!(response.0.results[0].title, "Gene Expression Study A");
    }
}
