//! Fetch Module Tests
//!
//! Validates payload flattening and the refresh lifecycle against the store.
//!
//! ## Test Scopes
//! - **Payload**: Flat and nested wire shapes, discovery order, articles
//!   without a category reference.
//! - **Seed source**: Loading the snapshot from a JSON file on disk.
//! - **Refresh**: Install on success, last-known-good on failure.
//!
//! *Note: the remote HTTP source shares the decode path with the seed file
//! and its retry loop is exercised in integration, not here.*

#[cfg(test)]
mod tests {
    use crate::fetch::source::{self, SnapshotSource};
    use crate::fetch::types::{RefreshResponse, SnapshotPayload};
    use crate::store::records::{RecordStore, StorePhase};
    use std::io::Write;

    const FLAT_PAYLOAD: &str = r##"{
        "categories": [
            {"id": "1", "name": "SRE Writer", "color": "#3b82f6"},
            {"id": "2", "name": "SRE Brain"}
        ],
        "articles": [
            {"id": "a", "question": "Cara membuat artikel", "category_id": "1",
             "tags": ["sre-writer"], "views": 1250},
            {"id": "b", "question": "Analisis data", "category_id": "2", "views": 750}
        ]
    }"##;

    const NESTED_PAYLOAD: &str = r#"{
        "categories": [
            {"id": "1", "name": "SRE Writer", "articles": [
                {"id": "a", "question": "Cara membuat artikel"},
                {"id": "b", "question": "Mengedit konten"}
            ]},
            {"id": "2", "name": "SRE Brain", "articles": [
                {"id": "c", "question": "Analisis data"}
            ]}
        ]
    }"#;

    // ============================================================
    // PAYLOAD FLATTENING TESTS
    // ============================================================

    #[test]
    fn test_flat_payload_into_snapshot() {
        let payload: SnapshotPayload = serde_json::from_str(FLAT_PAYLOAD).unwrap();
        let snap = payload.into_snapshot();

        assert_eq!(snap.categories().len(), 2);
        assert_eq!(snap.articles().len(), 2);
        assert_eq!(snap.article("a").unwrap().views, Some(1250));
        assert_eq!(snap.category("1").unwrap().color.as_deref(), Some("#3b82f6"));
    }

    #[test]
    fn test_nested_payload_fills_category_reference() {
        let payload: SnapshotPayload = serde_json::from_str(NESTED_PAYLOAD).unwrap();
        let snap = payload.into_snapshot();

        assert_eq!(snap.article("a").unwrap().category_id, "1");
        assert_eq!(snap.article("c").unwrap().category_id, "2");
        assert_eq!(snap.article_count("1"), 2);
    }

    #[test]
    fn test_nested_payload_discovery_order() {
        let payload: SnapshotPayload = serde_json::from_str(NESTED_PAYLOAD).unwrap();
        let snap = payload.into_snapshot();

        // Category enumeration order, then article order within category.
        let ids: Vec<_> = snap.articles().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_article_without_category_reference_is_skipped() {
        let raw = r#"{
            "articles": [
                {"id": "a", "question": "no home"},
                {"id": "b", "question": "has home", "category_id": "1"}
            ]
        }"#;
        let payload: SnapshotPayload = serde_json::from_str(raw).unwrap();
        let snap = payload.into_snapshot();

        assert!(snap.article("a").is_none());
        assert!(snap.article("b").is_some());
    }

    #[test]
    fn test_empty_payload_yields_empty_snapshot() {
        let payload: SnapshotPayload = serde_json::from_str("{}").unwrap();
        let snap = payload.into_snapshot();

        assert!(snap.categories().is_empty());
        assert!(snap.articles().is_empty());
    }

    // ============================================================
    // SEED SOURCE TESTS
    // ============================================================

    fn write_seed(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write seed");
        file
    }

    #[tokio::test]
    async fn test_seed_file_load() {
        let file = write_seed(FLAT_PAYLOAD);
        let source = SnapshotSource::seed_file(file.path());

        let snap = source.load().await.expect("seed should load");
        assert_eq!(snap.articles().len(), 2);
    }

    #[tokio::test]
    async fn test_seed_file_missing_is_an_error() {
        let source = SnapshotSource::seed_file("/nonexistent/helpdesk.json");
        assert!(source.load().await.is_err());
    }

    #[tokio::test]
    async fn test_seed_file_invalid_json_is_an_error() {
        let file = write_seed("{ not json");
        let source = SnapshotSource::seed_file(file.path());
        assert!(source.load().await.is_err());
    }

    // ============================================================
    // REFRESH TESTS
    // ============================================================

    #[tokio::test]
    async fn test_refresh_installs_snapshot() {
        let file = write_seed(FLAT_PAYLOAD);
        let source = SnapshotSource::seed_file(file.path());
        let store = RecordStore::new();

        source::refresh(&store, &source).await.expect("refresh");

        let status = store.status().await;
        assert_eq!(status.phase, StorePhase::Ready);
        assert_eq!(status.articles, 2);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_snapshot() {
        let file = write_seed(FLAT_PAYLOAD);
        let good = SnapshotSource::seed_file(file.path());
        let bad = SnapshotSource::seed_file("/nonexistent/helpdesk.json");
        let store = RecordStore::new();

        source::refresh(&store, &good).await.expect("first refresh");
        assert!(source::refresh(&store, &bad).await.is_err());

        let status = store.status().await;
        assert_eq!(status.phase, StorePhase::Degraded);
        assert_eq!(status.articles, 2, "data must survive a failed refresh");
        assert!(status.last_error.is_some());
    }

    // ============================================================
    // SERIALIZATION TESTS
    // ============================================================

    #[test]
    fn test_refresh_response_round_trip() {
        let response = RefreshResponse {
            status: "refreshing".to_string(),
            generation: 7,
        };

        let json = serde_json::to_string(&response).unwrap();
        let restored: RefreshResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.generation, 7);
        assert_eq!(restored.status, "refreshing");
    }
}
