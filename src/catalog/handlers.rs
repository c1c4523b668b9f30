use super::media;
use super::types::{
    ArticleDetailResponse, CategoryArticlesResponse, CategoryListResponse, CategorySummary,
    ErrorResponse, PopularParams, PopularResponse,
};
use crate::search::engine::{self, RankPolicy};
use crate::store::records::RecordStore;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

const DEFAULT_POPULAR_LIMIT: usize = 5;

type HandlerResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

fn store_loading() -> (StatusCode, Json<ErrorResponse>) {
    tracing::warn!("Catalog request rejected: store still loading");
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorResponse {
            error: "data not loaded yet".to_string(),
        }),
    )
}

fn not_found(what: &str, id: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("{} {} not found", what, id),
        }),
    )
}

/// `GET /api/categories`
pub async fn handle_list_categories(
    Extension(store): Extension<Arc<RecordStore>>,
) -> HandlerResult<CategoryListResponse> {
    let snapshot = store.snapshot().await.ok_or_else(store_loading)?;

    let categories: Vec<CategorySummary> = snapshot
        .categories()
        .iter()
        .map(|c| CategorySummary::from_category(c, snapshot.article_count(&c.id)))
        .collect();

    Ok(Json(CategoryListResponse {
        count: categories.len(),
        categories,
    }))
}

/// `GET /api/categories/{id}/articles`
///
/// Most-recently-created first. `created_at` is an RFC 3339 string, which
/// orders lexicographically; articles without a timestamp sort last.
pub async fn handle_category_articles(
    Path(category_id): Path<String>,
    Extension(store): Extension<Arc<RecordStore>>,
) -> HandlerResult<CategoryArticlesResponse> {
    let snapshot = store.snapshot().await.ok_or_else(store_loading)?;

    let category = snapshot
        .category(&category_id)
        .ok_or_else(|| not_found("category", &category_id))?;

    let mut articles = snapshot.articles_in(&category_id);
    articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let articles: Vec<_> = articles.into_iter().cloned().collect();
    Ok(Json(CategoryArticlesResponse {
        category: CategorySummary::from_category(category, articles.len()),
        count: articles.len(),
        articles,
    }))
}

/// `GET /api/articles/{id}`
///
/// The article joined with its owning category. A dangling category
/// reference is reported as not-found rather than returned as a
/// half-assembled pair.
pub async fn handle_get_article(
    Path(article_id): Path<String>,
    Extension(store): Extension<Arc<RecordStore>>,
) -> HandlerResult<ArticleDetailResponse> {
    let snapshot = store.snapshot().await.ok_or_else(store_loading)?;

    let article = snapshot
        .article(&article_id)
        .ok_or_else(|| not_found("article", &article_id))?;

    let category = snapshot.category(&article.category_id).ok_or_else(|| {
        tracing::warn!(
            article_id = %article.id,
            category_id = %article.category_id,
            "Article has dangling category reference"
        );
        not_found("article", &article_id)
    })?;

    let media = article.media.as_ref().and_then(media::resolve);

    Ok(Json(ArticleDetailResponse {
        article: article.clone(),
        category: category.clone(),
        media,
    }))
}

/// `GET /api/articles/popular?limit=`
///
/// View-ranked listing capped at `limit` (default 5). The ranking is
/// stable, so articles without a view counter keep their discovery order
/// at the tail.
pub async fn handle_popular_articles(
    Query(params): Query<PopularParams>,
    Extension(store): Extension<Arc<RecordStore>>,
) -> HandlerResult<PopularResponse> {
    let snapshot = store.snapshot().await.ok_or_else(store_loading)?;

    let limit = params.limit.unwrap_or(DEFAULT_POPULAR_LIMIT);
    let ranked = engine::rank(snapshot.articles().iter().collect(), RankPolicy::ByViews);
    let results: Vec<_> = engine::assemble(ranked, &snapshot)
        .into_iter()
        .take(limit)
        .collect();

    Ok(Json(PopularResponse {
        count: results.len(),
        results,
    }))
}
