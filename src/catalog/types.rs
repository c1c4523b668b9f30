//! Catalog Data Types
//!
//! DTOs for the category/article browsing endpoints.

use super::media::ResolvedMedia;
use crate::search::types::SearchHit;
use crate::store::snapshot::{Article, Category};
use serde::{Deserialize, Serialize};

/// A category together with its derived article count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub article_count: usize,
}

impl CategorySummary {
    pub fn from_category(category: &Category, article_count: usize) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.clone(),
            description: category.description.clone(),
            icon: category.icon.clone(),
            color: category.color.clone(),
            article_count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryListResponse {
    pub count: usize,
    pub categories: Vec<CategorySummary>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryArticlesResponse {
    pub category: CategorySummary,
    pub count: usize,
    pub articles: Vec<Article>,
}

/// A single article joined with its category and resolved media.
#[derive(Debug, Serialize, Deserialize)]
pub struct ArticleDetailResponse {
    pub article: Article,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<ResolvedMedia>,
}

#[derive(Debug, Deserialize)]
pub struct PopularParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PopularResponse {
    pub count: usize,
    pub results: Vec<SearchHit>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
