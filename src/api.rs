//! HTTP surface for the grading service.
//!
//! Thin axum layer over the scorer. Handlers own request validation and
//! limits; the scorer stays pure and never sees a bad input. The request
//! layer also owns every concurrency and shutdown concern — the scorer
//! imposes none.

mod grade;
mod state;

pub use state::ApiState;

use crate::config::Config;
use crate::error::ServeError;

use axum::Json;
use axum::Router;
use axum::http::Method;
use axum::http::header::CONTENT_TYPE;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};

use std::sync::Arc;
use std::time::Duration;

/// Build the service router.
pub fn router(state: Arc<ApiState>) -> Router {
    // The grading frontend runs in a browser on another origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/grade", post(grade::grade))
        .route("/api/health", get(health))
        .layer(cors)
        .with_state(state)
}

/// Bind the configured address and serve until interrupted.
pub async fn serve(config: Config) -> Result<(), ServeError> {
    let address = format!("{}:{}", config.http.host, config.http.port);
    let state = Arc::new(ApiState::new(config));
    let app = router(state);

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| ServeError::Bind {
            address: address.clone(),
            source,
        })?;

    tracing::info!(%address, "grading API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");

    Ok(())
}

/// Liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");

        tracing::info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;

        tracing::info!("received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
