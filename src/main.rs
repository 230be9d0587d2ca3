//! API server entrypoint.
//!
//! Boot order: load configuration, connect to MongoDB (fail-fast, awaited
//! before listening), bind the listener, register the daily attendance job
//! once, then serve until shutdown.

use std::net::SocketAddr;

use hr_api::{config::Config, db, jobs, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hr_api=info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Configuration error: {}", err);
            std::process::exit(1);
        }
    };

    let store = match db::connect(&config).await {
        Ok(store) => store,
        Err(err) => {
            tracing::error!("MongoDB connection failed: {}", err);
            std::process::exit(1);
        }
    };

    let bind_addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = match tokio::net::TcpListener::bind(bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("Failed to bind {}: {}", bind_addr, err);
            std::process::exit(1);
        }
    };

    tracing::info!("Server running on port {}", config.port);
    tracing::info!("Environment: {}", config.environment);

    let state = AppState::new(config, store.clone());

    // Listening from here on; register the recurring job exactly once.
    let job = jobs::spawn_daily_attendance_job(store);

    if let Err(err) = hr_api::serve_router(listener, state, shutdown_signal()).await {
        tracing::error!("Server error: {}", err);
        std::process::exit(1);
    }

    job.abort();
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
