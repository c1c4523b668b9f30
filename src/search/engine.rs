use super::matcher::MatchStrategy;
use super::types::SearchHit;
use crate::store::snapshot::{Article, Snapshot};

/// Ordering applied to a matched set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankPolicy {
    /// Descending by view count; articles without a counter sort as zero.
    /// The sort is stable, so ties keep their pre-sort relative order.
    ByViews,
    /// No reordering: discovery order (category enumeration order, then
    /// article order within category) is preserved.
    DiscoveryOrder,
}

/// Retains articles whose `category_id` equals `category_id`.
///
/// `None` passes everything through. The predicate only reads the category
/// reference, so this filter commutes with the matcher.
pub fn filter_by_category<'a>(
    articles: Vec<&'a Article>,
    category_id: Option<&str>,
) -> Vec<&'a Article> {
    match category_id {
        None => articles,
        Some(id) => articles
            .into_iter()
            .filter(|a| a.category_id == id)
            .collect(),
    }
}

pub fn rank<'a>(mut articles: Vec<&'a Article>, policy: RankPolicy) -> Vec<&'a Article> {
    match policy {
        RankPolicy::DiscoveryOrder => articles,
        RankPolicy::ByViews => {
            // sort_by is stable; equal view counts keep their input order.
            articles.sort_by(|a, b| b.views.unwrap_or(0).cmp(&a.views.unwrap_or(0)));
            articles
        }
    }
}

/// Joins each matched article to its owning category for display.
///
/// An article whose `category_id` resolves to nothing in the snapshot is
/// dropped rather than emitted as a malformed pair. Ordering of the input
/// is preserved.
pub fn assemble(matched: Vec<&Article>, snapshot: &Snapshot) -> Vec<SearchHit> {
    matched
        .into_iter()
        .filter_map(|article| match snapshot.category(&article.category_id) {
            Some(category) => Some(SearchHit {
                article: article.clone(),
                category: category.clone(),
            }),
            None => {
                tracing::warn!(
                    article_id = %article.id,
                    category_id = %article.category_id,
                    "Dropping article with dangling category reference"
                );
                None
            }
        })
        .collect()
}

/// The full pipeline: match, narrow by category, rank, assemble.
///
/// `term` is an already-normalized query term; `None` means no text filter.
/// Callers that want the empty-query-shows-nothing behavior of the live
/// surface short-circuit before reaching this function.
pub fn search(
    snapshot: &Snapshot,
    term: Option<&str>,
    category_id: Option<&str>,
    strategy: MatchStrategy,
    policy: RankPolicy,
) -> Vec<SearchHit> {
    let matched: Vec<&Article> = match term {
        None => snapshot.articles().iter().collect(),
        Some(term) => snapshot
            .articles()
            .iter()
            .filter(|a| strategy.matches(term, a))
            .collect(),
    };

    let narrowed = filter_by_category(matched, category_id);
    let ranked = rank(narrowed, policy);
    assemble(ranked, snapshot)
}
