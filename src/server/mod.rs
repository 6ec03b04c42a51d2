pub mod handlers;
mod types;

pub use types::HealthResponse;

use crate::{config::Config, predictor::HttpPredictorClient, Result};
use axum::{routing::get, Router};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::submit))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Initialize predictor client
    let client = HttpPredictorClient::new(&config.predictor)?;
    info!(
        "Predictor endpoint: {} (timeout {}s)",
        client.url(),
        config.predictor.timeout_secs
    );

    // Create application state
    let app_state = AppState {
        predictor_url: client.url().to_string(),
        client: Arc::new(client),
    };

    let app = router(app_state);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
