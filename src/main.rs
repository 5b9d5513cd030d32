use axum::middleware::from_fn;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;

mod api;
mod app_state;
mod config;
mod db;
mod graphql;
mod middleware;
mod utils;

use crate::api::graphql::graphql_routes;
use crate::app_state::AppState;
use crate::config::Config;
use crate::db::id::UuidGenerator;
use crate::db::store::Store;
use crate::graphql::graph_schema::create_schema;
use crate::middleware::request_logger::log_requests;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::init();
    let _log_guard = init_tracing(&config)?;

    let store = if config.seed_data {
        Store::seeded()
    } else {
        Store::new(Arc::new(UuidGenerator))
    };
    let counts = store.counts().await;
    info!(
        "Store ready: {} users, {} posts, {} comments",
        counts.users, counts.posts, counts.comments
    );

    let graphql_schema = create_schema(store.clone());
    let state = AppState {
        store,
        config: config.clone(),
    };

    let app = Router::new()
        .merge(api::health::health_routes())
        .merge(graphql_routes(graphql_schema, config.playground_enabled))
        .fallback(api::route_not_found)
        .layer(from_fn(log_requests))
        .layer(CorsLayer::permissive())
        .with_state(state);

    run_server(app, &config).await
}

/// Stdout by default; daily rolling `app.log` when `LOG_DIR` is set.
fn init_tracing(config: &Config) -> anyhow::Result<Option<WorkerGuard>> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(config.log_level) // Adjust log level with LOG_LEVEL (e.g., DEBUG, TRACE)
        .with_target(true); // Include target (module path) in logs

    match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::daily(dir, "app.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            builder.with_writer(non_blocking).init();
            Ok(Some(guard))
        }
        None => {
            builder.init();
            Ok(None)
        }
    }
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down..."),
        Err(e) => warn!("Failed to listen for Ctrl+C: {}", e),
    }
}

async fn run_server(app: Router, config: &Config) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(&addr).await?;
    info!("🚀 The server is up! GraphQL at http://{}/graphql", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("✅ Shutdown complete.");
    Ok(())
}
