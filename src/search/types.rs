//! Search Data Types
//!
//! DTOs crossing the HTTP boundary of the search surface.

use crate::store::snapshot::{Article, Category};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub limit: Option<usize>,
}

/// One matched article paired with its owning category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub article: Article,
    pub category: Category,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub total_count: usize,
    pub count: usize,
    pub results: Vec<SearchHit>,
}
