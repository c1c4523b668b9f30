use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use helpdesk::catalog::handlers::{
    handle_category_articles, handle_get_article, handle_list_categories,
    handle_popular_articles,
};
use helpdesk::fetch::handlers::{handle_refresh, handle_status};
use helpdesk::fetch::source::{self, SnapshotSource};
use helpdesk::search::handlers::handle_search;
use helpdesk::store::records::RecordStore;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: Option<SocketAddr> = None;
    let mut source_url: Option<String> = None;
    let mut seed_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = Some(args[i + 1].parse()?);
                i += 2;
            }
            "--source" => {
                source_url = Some(args[i + 1].clone());
                i += 2;
            }
            "--seed" => {
                seed_path = Some(args[i + 1].clone());
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let Some(bind_addr) = bind_addr else {
        eprintln!("Usage: {} --bind <addr:port> (--source <url> | --seed <file>)", args[0]);
        eprintln!("Example: {} --bind 127.0.0.1:4000 --seed seed/helpdesk_seed.json", args[0]);
        std::process::exit(1);
    };

    let snapshot_source = match (source_url, seed_path) {
        (Some(url), _) => SnapshotSource::remote(url),
        (None, Some(path)) => SnapshotSource::seed_file(path),
        (None, None) => {
            eprintln!("Either --source <url> or --seed <file> is required");
            std::process::exit(1);
        }
    };
    let snapshot_source = Arc::new(snapshot_source);

    tracing::info!("Starting help-center service on {}", bind_addr);

    let store = Arc::new(RecordStore::new());

    // Initial population; a failure leaves the store in Loading/Degraded and
    // the service comes up anyway, answering 503 until a refresh succeeds.
    if let Err(e) = source::refresh(&store, &snapshot_source).await {
        tracing::error!("Initial snapshot fetch failed: {:#}", e);
    }

    let app = Router::new()
        .route("/api/search", get(handle_search))
        .route("/api/categories", get(handle_list_categories))
        .route("/api/categories/:id/articles", get(handle_category_articles))
        .route("/api/articles/popular", get(handle_popular_articles))
        .route("/api/articles/:id", get(handle_get_article))
        .route("/api/refresh", post(handle_refresh))
        .route("/api/status", get(handle_status))
        .layer(Extension(store))
        .layer(Extension(snapshot_source));

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Listening on {}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
