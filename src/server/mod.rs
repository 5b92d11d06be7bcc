pub mod handlers;
pub mod types;

pub use handlers::AppState;

use crate::artifact::ModelArtifact;
use crate::sentiment::SentimentAnalyzer;
use crate::{Result, config::Config};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

/// Builds the application router; shared by [`run`] and the integration
/// tests so both drive the same routes and layers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/predict", post(handlers::predict))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Load the model artifact once; failure degrades the service to an
    // unhealthy state instead of aborting the process
    let artifact = match ModelArtifact::load(&config.model.artifact_path) {
        Ok(artifact) => {
            info!("Model artifact loaded from {}", config.model.artifact_path);
            Some(Arc::new(artifact))
        }
        Err(e) => {
            error!("Error loading model artifact: {}", e);
            None
        }
    };

    let state = AppState {
        artifact,
        analyzer: Arc::new(SentimentAnalyzer::default()),
    };

    let app = router(state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
