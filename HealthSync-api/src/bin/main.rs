use anyhow::Context;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use health_sync_api::{create_application, AppConfig, AppState};

/// The main entry point for the HealthSync API server
///
/// This function:
/// 1. Loads environment variables from a .env file
/// 2. Sets up tracing for logging
/// 3. Builds the in-memory services from configuration
/// 4. Serves the Axum application until a shutdown signal arrives
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    if dotenv().is_err() {
        eprintln!("Warning: .env file not found or couldn't be read. Using environment variables.");
    }

    // Initialize tracing for structured logging
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_span_events(FmtSpan::CLOSE)
                .with_target(false)
                .with_ansi(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stdout),
        )
        .with(env_filter)
        .init();

    info!("🚀 Starting HealthSync API server");

    let config = AppConfig::from_env().context("Failed to read configuration")?;
    info!(
        environment = %config.environment,
        session_ttl_minutes = config.session_ttl_minutes,
        voice_output = %config.voice_output,
        "Configuration loaded"
    );

    let state = AppState::from_config(&config)?;
    if !state.voice.is_available() {
        info!("Voice output disabled; reports will not be spoken");
    }

    let app = create_application(state);

    let addr = config.socket_addr();
    info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on CTRL+C or SIGTERM (on Unix systems).
///
/// A handler that cannot be installed is logged and never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutting down server...");
}
