//! Catalog Module Tests
//!
//! Validates derived counts, recency ordering and media resolution.
//!
//! ## Test Scopes
//! - **Summaries**: Article counts derived from the snapshot.
//! - **Recency**: `created_at` descending with absent timestamps last.
//! - **Media**: YouTube locator parsing and graceful degradation.

#[cfg(test)]
mod tests {
    use crate::catalog::media::{self, youtube_embed_url};
    use crate::catalog::types::CategorySummary;
    use crate::store::snapshot::{Article, Category, MediaDescriptor, MediaKind, Snapshot};

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            description: Some("desc".to_string()),
            icon: Some("IconPencil".to_string()),
            color: Some("#3b82f6".to_string()),
            created_at: None,
        }
    }

    fn article(id: &str, category_id: &str, created_at: Option<&str>) -> Article {
        Article {
            id: id.to_string(),
            question: format!("question {}", id),
            answer: None,
            category_id: category_id.to_string(),
            tags: vec![],
            views: None,
            helpful: None,
            created_at: created_at.map(str::to_string),
            media: None,
        }
    }

    // ============================================================
    // SUMMARY TESTS
    // ============================================================

    #[test]
    fn test_summary_carries_derived_count() {
        let snap = Snapshot::new(
            vec![category("1", "Writer")],
            vec![article("a", "1", None), article("b", "1", None)],
        );

        let summary =
            CategorySummary::from_category(snap.category("1").unwrap(), snap.article_count("1"));
        assert_eq!(summary.article_count, 2);
        assert_eq!(summary.name, "Writer");
        assert_eq!(summary.color.as_deref(), Some("#3b82f6"));
    }

    // ============================================================
    // RECENCY ORDERING TESTS
    // ============================================================

    #[test]
    fn test_recency_sort_most_recent_first() {
        let mut articles = vec![
            article("old", "1", Some("2024-01-05T10:00:00Z")),
            article("new", "1", Some("2024-03-20T08:40:00Z")),
            article("mid", "1", Some("2024-02-11T16:00:00Z")),
        ];
        articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let ids: Vec<_> = articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_recency_sort_missing_timestamp_last() {
        let mut articles = vec![
            article("undated", "1", None),
            article("dated", "1", Some("2024-03-20T08:40:00Z")),
        ];
        articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        assert_eq!(articles[0].id, "dated");
        assert_eq!(articles[1].id, "undated");
    }

    // ============================================================
    // MEDIA RESOLUTION TESTS
    // ============================================================

    fn descriptor(kind: MediaKind, url: Option<&str>) -> MediaDescriptor {
        MediaDescriptor {
            kind,
            url: url.map(str::to_string),
            title: Some("clip".to_string()),
            description: None,
        }
    }

    #[test]
    fn test_youtube_watch_url() {
        assert_eq!(
            youtube_embed_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_youtube_short_url() {
        assert_eq!(
            youtube_embed_url("https://youtu.be/dQw4w9WgXcQ"),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_youtube_embed_url_passthrough() {
        assert_eq!(
            youtube_embed_url("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_youtube_unparseable_locator() {
        assert_eq!(youtube_embed_url("https://example.com/video/123"), None);
        assert_eq!(youtube_embed_url("not a url"), None);
    }

    #[test]
    fn test_resolve_image_keeps_url() {
        let resolved = media::resolve(&descriptor(
            MediaKind::Image,
            Some("https://cdn.example.com/a.png"),
        ))
        .expect("image should resolve");

        assert_eq!(resolved.url, "https://cdn.example.com/a.png");
        assert_eq!(resolved.kind, MediaKind::Image);
        assert_eq!(resolved.title.as_deref(), Some("clip"));
    }

    #[test]
    fn test_resolve_youtube_rewrites_to_embed() {
        let resolved = media::resolve(&descriptor(
            MediaKind::Youtube,
            Some("https://www.youtube.com/watch?v=abc123XYZ"),
        ))
        .expect("youtube should resolve");

        assert_eq!(resolved.url, "https://www.youtube.com/embed/abc123XYZ");
    }

    #[test]
    fn test_resolve_degrades_on_missing_locator() {
        assert!(media::resolve(&descriptor(MediaKind::Video, None)).is_none());
        assert!(media::resolve(&descriptor(MediaKind::Image, Some("   "))).is_none());
    }

    #[test]
    fn test_resolve_degrades_on_bad_youtube_locator() {
        let resolved = media::resolve(&descriptor(
            MediaKind::Youtube,
            Some("https://vimeo.com/123456"),
        ));
        assert!(resolved.is_none(), "malformed locator must be omitted");
    }
}
