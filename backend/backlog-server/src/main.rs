use backlog_server::{AppState, build_router, error::Result as ServerResult, logger};

use backlog_config::Config;

use std::error::Error;
use std::path::PathBuf;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    let config = load_config()?;

    // Initialize logger (before any other logging)
    let log_file_path = config.logging.file.as_ref().map(PathBuf::from);
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting backlog-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let bind_addr = config.bind_addr();
    let app = build_router(AppState::new(config));

    // Create TCP listener
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

/// Load and validate configuration
fn load_config() -> ServerResult<Config> {
    let config = Config::load()?;
    config.validate()?;
    Ok(config)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Keep serving without a shutdown trigger
            std::future::pending::<()>().await;
        }
    }
}
