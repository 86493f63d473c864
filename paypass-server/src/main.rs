//! PayPass Backend - Main Entry Point
//!
//! This binary serves the mock PayPass JSON API over HTTP.

use tokio::signal;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use paypass_server::config::{Profile, ServerConfig};
use paypass_server::http::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let log_level = match config.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting PayPass Backend ({} profile)", config.profile);
    match &config.env_file {
        Some(path) => info!("Loaded environment from {:?}", path),
        None => debug!("No env file found"),
    }
    info!("Configuration: {:?}", config);

    let base_url = config.base_url();
    let profile = config.profile;
    let http_addr = config.http_addr();

    let router = paypass_server::http::create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(http_addr).await?;

    info!("PayPass Backend running on port {}", http_addr.port());
    info!("Test the API: {}/api/test", base_url);
    info!("Packages: {}/api/packages", base_url);
    info!("Washing Places: {}/api/washing-places", base_url);
    if profile == Profile::Production {
        warn!("Running in TEST MODE without database");
    }

    // --- Graceful Shutdown ---
    let shutdown_signal = async {
        let ctrl_c = async {
            signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("Failed to install signal handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {},
            _ = terminate => {},
        }

        info!("Shutdown signal received, starting graceful shutdown...");
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
