pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::Config,
    relay::Relay,
    webhook::{HttpWebhookClient, WebhookClient},
};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

/// Builds the application state around the given webhook client.
pub fn state_with_client(config: &Config, client: Arc<dyn WebhookClient>) -> AppState {
    AppState {
        relay: Arc::new(Relay::new(client, config.fallback.clone())),
        banner: Arc::from(config.server.banner.as_str()),
        empty_sentence: config.relay.empty_sentence,
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/summary", get(handlers::summary))
        .route("/api/word", get(handlers::word_of_the_day))
        .route("/api/validate-sentence", post(handlers::validate_sentence))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let client = HttpWebhookClient::new(&config.webhook)?;
    info!("Forwarding sentences to {}", client.url());

    let app = router(state_with_client(&config, Arc::new(client)));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
}
