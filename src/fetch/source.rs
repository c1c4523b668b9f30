use super::types::SnapshotPayload;
use crate::store::records::RecordStore;
use crate::store::snapshot::Snapshot;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const FETCH_ATTEMPTS: usize = 3;

/// Where the snapshot comes from.
///
/// Any backing store works as long as it yields the full data set in one
/// response; atomic-replace semantics are provided by the record store, not
/// the source.
pub enum SnapshotSource {
    Remote {
        url: String,
        client: reqwest::Client,
    },
    SeedFile {
        path: PathBuf,
    },
}

impl SnapshotSource {
    pub fn remote(url: impl Into<String>) -> Self {
        Self::Remote {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn seed_file(path: impl Into<PathBuf>) -> Self {
        Self::SeedFile { path: path.into() }
    }

    /// Loads and flattens the full data set.
    pub async fn load(&self) -> Result<Snapshot> {
        let payload = match self {
            Self::Remote { url, client } => fetch_payload(client, url).await?,
            Self::SeedFile { path } => {
                let raw = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("reading seed file {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("parsing seed file {}", path.display()))?
            }
        };
        Ok(payload.into_snapshot())
    }
}

async fn fetch_payload(client: &reqwest::Client, url: &str) -> Result<SnapshotPayload> {
    let mut delay_ms = 150u64;

    for attempt in 0..FETCH_ATTEMPTS {
        let response = client.get(url).timeout(FETCH_TIMEOUT).send().await;

        match response {
            Ok(resp) => {
                let resp = resp.error_for_status()?;
                return resp
                    .json::<SnapshotPayload>()
                    .await
                    .context("decoding snapshot payload");
            }
            Err(e) => {
                if attempt + 1 == FETCH_ATTEMPTS {
                    return Err(anyhow::anyhow!(e)).context("fetching snapshot");
                }
                let jitter = rand::random::<u64>() % 50;
                tokio::time::sleep(Duration::from_millis(delay_ms + jitter)).await;
                delay_ms = (delay_ms * 2).min(1200);
            }
        }
    }

    Err(anyhow::anyhow!("Retry attempts exhausted"))
}

/// Runs one refresh to completion: load, then install or mark failed.
///
/// A failure keeps the store's previous snapshot (last-known-good) and is
/// reported to the caller.
pub async fn refresh(store: &RecordStore, source: &SnapshotSource) -> Result<()> {
    let generation = store.begin_refresh();
    run_refresh(generation, store, source).await
}

/// Kicks off a refresh in the background and returns its generation.
pub fn spawn_refresh(store: Arc<RecordStore>, source: Arc<SnapshotSource>) -> u64 {
    let generation = store.begin_refresh();
    tokio::spawn(async move {
        if let Err(e) = run_refresh(generation, &store, &source).await {
            tracing::error!(generation, "Background refresh failed: {:#}", e);
        }
    });
    generation
}

async fn run_refresh(
    generation: u64,
    store: &RecordStore,
    source: &SnapshotSource,
) -> Result<()> {
    match source.load().await {
        Ok(snapshot) => {
            if store.install(generation, snapshot).await {
                tracing::info!(generation, "Snapshot installed");
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!(generation, "Snapshot fetch failed: {:#}", e);
            store.mark_failed(generation, &format!("{:#}", e)).await;
            Err(e)
        }
    }
}
