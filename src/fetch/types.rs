//! Fetch Data Types
//!
//! The wire payload accepted from the data source plus the DTOs of the
//! refresh/status endpoints.

use crate::store::snapshot::{Article, Category, MediaDescriptor, Snapshot};
use serde::{Deserialize, Serialize};

/// A category as it appears on the wire, optionally carrying its articles
/// inline (the nested shape the live backend serves).
#[derive(Debug, Deserialize)]
pub struct CategoryPayload {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub articles: Vec<ArticlePayload>,
}

/// An article on the wire. `category_id` may be omitted when the article is
/// nested inside its category.
#[derive(Debug, Deserialize)]
pub struct ArticlePayload {
    pub id: String,
    pub question: String,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub helpful: Option<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub media: Option<MediaDescriptor>,
}

/// The full document served by the source of truth.
#[derive(Debug, Deserialize)]
pub struct SnapshotPayload {
    #[serde(default)]
    pub categories: Vec<CategoryPayload>,
    #[serde(default)]
    pub articles: Vec<ArticlePayload>,
}

impl SnapshotPayload {
    /// Flattens the payload into a snapshot.
    ///
    /// Embedded articles come first, in category order then article order
    /// within each category; top-level articles follow in their own order.
    /// That enumeration order is the discovery order later surfaces rely on.
    /// Articles without any category reference are skipped.
    pub fn into_snapshot(self) -> Snapshot {
        let mut categories = Vec::with_capacity(self.categories.len());
        let mut articles = Vec::new();

        for payload in self.categories {
            for article in payload.articles {
                if let Some(article) = materialize(article, Some(&payload.id)) {
                    articles.push(article);
                }
            }
            categories.push(Category {
                id: payload.id,
                name: payload.name,
                description: payload.description,
                icon: payload.icon,
                color: payload.color,
                created_at: payload.created_at,
            });
        }

        for article in self.articles {
            if let Some(article) = materialize(article, None) {
                articles.push(article);
            }
        }

        Snapshot::new(categories, articles)
    }
}

fn materialize(payload: ArticlePayload, parent_category: Option<&str>) -> Option<Article> {
    let category_id = match payload
        .category_id
        .or_else(|| parent_category.map(str::to_string))
    {
        Some(id) => id,
        None => {
            tracing::warn!(
                article_id = %payload.id,
                "Skipping article without category reference"
            );
            return None;
        }
    };

    Some(Article {
        id: payload.id,
        question: payload.question,
        answer: payload.answer,
        category_id,
        tags: payload.tags,
        views: payload.views,
        helpful: payload.helpful,
        created_at: payload.created_at,
        media: payload.media,
    })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub status: String,
    pub generation: u64,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: crate::store::records::StoreStatus,
}
