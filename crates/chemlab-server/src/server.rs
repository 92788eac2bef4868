//! HTTP server for the experiment API.
//!
//! Exposes a single `POST /run_experiment` endpoint that dispatches on
//! the `experiment` tag of the JSON body. The router is built
//! explicitly at startup and handed to the serving loop; no global
//! state is registered.

use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use chemlab_core::{dispatch, ChemError};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address.
    pub addr: SocketAddr,
    /// Allow cross-origin requests from any origin.
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors: true,
        }
    }
}

/// The HTTP server.
pub struct Server {
    config: ServerConfig,
}

impl Server {
    /// Create a new server with the given configuration.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Build the router.
    #[must_use]
    pub fn router(&self) -> Router {
        let mut router = Router::new().route("/run_experiment", post(run_experiment));

        router = router.layer(TraceLayer::new_for_http());

        if self.config.cors {
            router = router.layer(CorsLayer::permissive());
        }

        router
    }

    /// Run the server until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if the listen address cannot be bound.
    pub async fn run(self) -> anyhow::Result<()> {
        let router = self.router();

        tracing::info!(addr = %self.config.addr, "starting chemlab server");
        let listener = tokio::net::TcpListener::bind(self.config.addr).await?;

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}

// === Handlers ===

async fn run_experiment(Json(body): Json<serde_json::Value>) -> Response {
    match dispatch::run_json(&body) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => error_response(&err),
    }
}

// === Error Response ===

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Client-facing message for an error.
///
/// The unknown-tag body is pinned to exactly "Unknown experiment"; the
/// offending tag is logged rather than echoed.
fn error_message(err: &ChemError) -> String {
    match err {
        ChemError::UnknownExperiment(tag) => {
            tracing::warn!(tag = %tag, "unknown experiment requested");
            "Unknown experiment".to_string()
        }
        other => other.to_string(),
    }
}

fn error_response(err: &ChemError) -> Response {
    let body = Json(ErrorBody {
        error: error_message(err),
    });
    (StatusCode::BAD_REQUEST, body).into_response()
}
