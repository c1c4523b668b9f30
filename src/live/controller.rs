use crate::search::engine::{self, RankPolicy};
use crate::search::matcher::MatchStrategy;
use crate::search::query::Query;
use crate::search::types::SearchHit;
use crate::store::snapshot::Snapshot;
use std::sync::Arc;

/// Observable state of the live filter.
///
/// `ResultsEmpty` is a user-visible "nothing found" state, distinct from
/// `Idle` (no query at all, nothing shown).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveState {
    Idle,
    ResultsShown,
    ResultsEmpty,
}

/// Drives the search-as-you-type surface.
///
/// Matching uses the question-only strategy: the live browsing tree does
/// not pre-search answers or tags. Whether live results should be ranked by
/// popularity is a deployment choice, so the rank policy is a constructor
/// parameter; discovery order is the default.
pub struct LiveFilter {
    snapshot: Arc<Snapshot>,
    policy: RankPolicy,
    query: String,
    state: LiveState,
    results: Vec<SearchHit>,
}

impl LiveFilter {
    pub fn new(snapshot: Arc<Snapshot>) -> Self {
        Self::with_rank_policy(snapshot, RankPolicy::DiscoveryOrder)
    }

    pub fn with_rank_policy(snapshot: Arc<Snapshot>, policy: RankPolicy) -> Self {
        Self {
            snapshot,
            policy,
            query: String::new(),
            state: LiveState::Idle,
            results: Vec::new(),
        }
    }

    pub fn state(&self) -> LiveState {
        self.state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchHit] {
        &self.results
    }

    /// Applies a query-text change.
    ///
    /// A blank query returns to `Idle` with results cleared; anything else
    /// recomputes the full match set synchronously.
    pub fn set_query(&mut self, raw: &str) {
        self.query = raw.to_string();

        match Query::parse(raw) {
            Query::Empty => {
                self.results.clear();
                self.state = LiveState::Idle;
            }
            Query::Term(term) => {
                self.results = engine::search(
                    &self.snapshot,
                    Some(&term),
                    None,
                    MatchStrategy::QuestionOnly,
                    self.policy,
                );
                self.state = if self.results.is_empty() {
                    LiveState::ResultsEmpty
                } else {
                    LiveState::ResultsShown
                };
            }
        }
    }

    /// External dismissal (click outside the search surface, escape, ...).
    pub fn dismiss(&mut self) {
        self.query.clear();
        self.results.clear();
        self.state = LiveState::Idle;
    }

    /// Picks a result by position in the shown list.
    ///
    /// Returns the chosen article/category pair and resets to `Idle` with
    /// the query cleared. Out-of-range selection (or selecting while
    /// nothing is shown) changes nothing and returns `None`.
    pub fn select(&mut self, index: usize) -> Option<SearchHit> {
        if self.state != LiveState::ResultsShown {
            return None;
        }
        let hit = self.results.get(index)?.clone();
        self.dismiss();
        Some(hit)
    }

    /// Swaps in a freshly fetched snapshot and re-runs the current query.
    pub fn replace_snapshot(&mut self, snapshot: Arc<Snapshot>) {
        self.snapshot = snapshot;
        let query = self.query.clone();
        self.set_query(&query);
    }
}
