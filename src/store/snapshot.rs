use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A help-center category as delivered by the source of truth.
///
/// The `article_count` visible to API clients is derived from the snapshot
/// (see [`Snapshot::article_count`]), never read from the source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
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
}

/// A single question/answer article.
///
/// `category_id` should reference an existing [`Category`]; a dangling
/// reference is tolerated downstream and treated as "no category".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub question: String,
    #[serde(default)]
    pub answer: Option<String>,
    pub category_id: String,
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

/// Optional media attachment on an article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaDescriptor {
    pub kind: MediaKind,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Youtube,
}

/// One immutable, fully indexed view of the data set.
///
/// Categories and articles keep the order in which the source enumerated
/// them; that order is the "discovery order" the ranker falls back to.
#[derive(Debug)]
pub struct Snapshot {
    categories: Vec<Category>,
    articles: Vec<Article>,
    category_index: HashMap<String, usize>,
    article_index: HashMap<String, usize>,
}

impl Snapshot {
    pub fn new(categories: Vec<Category>, articles: Vec<Article>) -> Self {
        let category_index = categories
            .iter()
            .enumerate()
            .map(|(pos, c)| (c.id.clone(), pos))
            .collect();
        let article_index = articles
            .iter()
            .enumerate()
            .map(|(pos, a)| (a.id.clone(), pos))
            .collect();

        Self {
            categories,
            articles,
            category_index,
            article_index,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.category_index.get(id).map(|&pos| &self.categories[pos])
    }

    pub fn article(&self, id: &str) -> Option<&Article> {
        self.article_index.get(id).map(|&pos| &self.articles[pos])
    }

    /// Articles belonging to `category_id`, in discovery order.
    pub fn articles_in(&self, category_id: &str) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| a.category_id == category_id)
            .collect()
    }

    /// Derived count of articles referencing `category_id`.
    pub fn article_count(&self, category_id: &str) -> usize {
        self.articles
            .iter()
            .filter(|a| a.category_id == category_id)
            .count()
    }
}
