use super::engine::{self, RankPolicy};
use super::matcher::MatchStrategy;
use super::query::Query as SearchQuery;
use super::types::{SearchParams, SearchResponse};
use crate::store::records::RecordStore;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

/// `GET /api/search?q=&category=&limit=`
///
/// An absent or blank `q` means "no text filter" on this surface (the live
/// controller treats blank input differently, see `live::controller`).
/// Results are matched across question, answer and tags, then ranked by
/// view count.
pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(store): Extension<Arc<RecordStore>>,
) -> (StatusCode, Json<SearchResponse>) {
    let Some(snapshot) = store.snapshot().await else {
        tracing::warn!("Search request rejected: store still loading");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(SearchResponse {
                query: params.q,
                category: params.category,
                total_count: 0,
                count: 0,
                results: vec![],
            }),
        );
    };

    let query = params.q.as_deref().map(SearchQuery::parse);
    let term = query.as_ref().and_then(SearchQuery::as_term);

    let hits = engine::search(
        &snapshot,
        term,
        params.category.as_deref(),
        MatchStrategy::MultiField,
        RankPolicy::ByViews,
    );

    let total_count = hits.len();
    let results = match params.limit {
        Some(limit) => hits.into_iter().take(limit).collect(),
        None => hits,
    };

    tracing::debug!(
        query = term.unwrap_or(""),
        total_count,
        "Search completed"
    );

    (
        StatusCode::OK,
        Json(SearchResponse {
            query: term.map(str::to_string),
            category: params.category,
            total_count,
            count: results.len(),
            results,
        }),
    )
}
