//! HTTP server initialization and runtime setup.
//!
//! Wires the store client, repository, service, and Axum server lifecycle.

use crate::application::services::ReviewService;
use crate::config::Config;
use crate::infrastructure::notion::NotionClient;
use crate::infrastructure::persistence::NotionReviewRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::extract::Request;
use axum::ServiceExt;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - the content store HTTP client (with request timeout)
/// - the review repository and service
/// - the Axum HTTP server
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built, the bind address is
/// invalid, or the server fails at runtime.
pub async fn run(config: Config) -> Result<()> {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_seconds))
        .build()?;

    let client = NotionClient::new(http, config.notion_api_key.clone());
    let repository = Arc::new(NotionReviewRepository::new(
        client,
        config.notion_database_id.clone(),
    ));
    let service = Arc::new(ReviewService::new(repository));
    tracing::info!("Review service ready");

    let state = AppState::new(service);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutting down");
    }
}
