//! HR management REST backend: router wiring, shared state, and the serve
//! loop. The binary in `main.rs` owns configuration loading, the database
//! bootstrap, and job registration.

pub mod config;
pub mod cors;
pub mod db;
pub mod error;
pub mod jobs;
pub mod models;
pub mod routes;

pub use config::{Config, ConfigError, DEFAULT_PORT};
pub use db::Store;
pub use error::AppError;

use axum::{middleware, routing::get, Router};
use std::future::Future;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared state cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, store: Store) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

/// Create the application router with all routes and middleware.
///
/// Layer order, outermost first: request tracing, origin enforcement (the
/// CORS deny path), then the decorating CORS layer. The route table is static;
/// unknown paths fall through to a JSON 404.
pub fn create_app(state: AppState) -> Router {
    let cors = cors::cors_layer(&state.config.allowed_origins());

    routes::api_router()
        .route("/api/health", get(routes::health))
        .fallback(routes::not_found)
        .with_state(state.clone())
        .layer(
            tower::ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn_with_state(state, cors::enforce_origin))
                .layer(cors),
        )
}

/// Run the server until the shutdown future resolves.
///
/// # Errors
/// Returns any I/O error produced by `axum::serve`.
pub async fn serve_router(
    listener: tokio::net::TcpListener,
    state: AppState,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    let app = create_app(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
}
