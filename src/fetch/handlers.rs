use super::source::{self, SnapshotSource};
use super::types::{RefreshResponse, StatusResponse};
use crate::store::records::RecordStore;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

/// `POST /api/refresh`
///
/// Starts a background re-fetch and answers immediately. If a newer refresh
/// starts before this one finishes, this one's result is discarded.
pub async fn handle_refresh(
    Extension(store): Extension<Arc<RecordStore>>,
    Extension(snapshot_source): Extension<Arc<SnapshotSource>>,
) -> (StatusCode, Json<RefreshResponse>) {
    let generation = source::spawn_refresh(store, snapshot_source);
    tracing::info!(generation, "Refresh triggered");

    (
        StatusCode::ACCEPTED,
        Json(RefreshResponse {
            status: "refreshing".to_string(),
            generation,
        }),
    )
}

/// `GET /api/status`
pub async fn handle_status(
    Extension(store): Extension<Arc<RecordStore>>,
) -> (StatusCode, Json<StatusResponse>) {
    let status = store.status().await;
    (StatusCode::OK, Json(StatusResponse { status }))
}
