use super::snapshot::Snapshot;
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Lifecycle phase of the store, as reported on the status surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorePhase {
    /// No snapshot has ever been installed.
    Loading,
    /// A snapshot is resident and the last refresh succeeded.
    Ready,
    /// The last refresh failed; the previous snapshot (if any) is still served.
    Degraded,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreStatus {
    pub phase: StorePhase,
    pub categories: usize,
    pub articles: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}

struct StoreState {
    snapshot: Option<Arc<Snapshot>>,
    phase: StorePhase,
    last_error: Option<String>,
}

/// Shared holder of the current [`Snapshot`].
///
/// Exactly one refresh task writes at a time conceptually, but overlapping
/// refreshes are resolved by generation number: `begin_refresh` hands out a
/// fresh generation and only the result of the newest generation is ever
/// installed. A failed refresh leaves the last-known-good snapshot in place.
pub struct RecordStore {
    state: RwLock<StoreState>,
    generation: AtomicU64,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                snapshot: None,
                phase: StorePhase::Loading,
                last_error: None,
            }),
            generation: AtomicU64::new(0),
        }
    }

    /// Registers a new refresh attempt and returns its generation.
    ///
    /// Any refresh started earlier becomes stale immediately: its eventual
    /// `install`/`mark_failed` call is a no-op.
    pub fn begin_refresh(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Atomically replaces the snapshot if `generation` is still current.
    ///
    /// Returns `false` when a newer refresh has started in the meantime and
    /// the result was discarded.
    pub async fn install(&self, generation: u64, snapshot: Snapshot) -> bool {
        if generation != self.generation.load(Ordering::SeqCst) {
            tracing::debug!(
                generation,
                "Discarding snapshot from superseded refresh"
            );
            return false;
        }

        let mut state = self.state.write().await;
        state.snapshot = Some(Arc::new(snapshot));
        state.phase = StorePhase::Ready;
        state.last_error = None;
        true
    }

    /// Records a refresh failure without touching the resident snapshot.
    pub async fn mark_failed(&self, generation: u64, error: &str) {
        if generation != self.generation.load(Ordering::SeqCst) {
            return;
        }

        let mut state = self.state.write().await;
        state.phase = StorePhase::Degraded;
        state.last_error = Some(error.to_string());
    }

    /// The current snapshot, or `None` while the store is still loading.
    pub async fn snapshot(&self) -> Option<Arc<Snapshot>> {
        self.state.read().await.snapshot.clone()
    }

    pub async fn status(&self) -> StoreStatus {
        let state = self.state.read().await;
        let (categories, articles) = match &state.snapshot {
            Some(snap) => (snap.categories().len(), snap.articles().len()),
            None => (0, 0),
        };
        StoreStatus {
            phase: state.phase,
            categories,
            articles,
            last_error: state.last_error.clone(),
        }
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
