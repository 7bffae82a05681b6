use signup_server::{AppState, build_router, logger, shutdown};

use std::error::Error;

use log::info;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is normal outside development
    let dotenv = dotenvy::dotenv();

    // Load and validate configuration
    let config = signup_config::Config::load()?;
    config.validate()?;

    // Ensure log directory exists before the file sink opens
    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(parent)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(&config.logging, log_file_path)?;

    info!("Starting signup-server v{}", env!("CARGO_PKG_VERSION"));
    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    let pool = signup_db::connect(
        &database_path,
        config.database.max_connections,
        config.database.busy_timeout(),
    )
    .await?;

    info!("Running database migrations...");
    signup_db::run_migrations(&pool).await?;
    info!("Migrations complete");

    let app = build_router(AppState::new(pool.clone(), &config));

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Actual bound address matters when port is 0
    let actual_addr = listener.local_addr()?;
    info!(
        "Server listening on {} ({})",
        actual_addr, config.server.environment
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::signal())
        .await?;

    info!("Closing database pool");
    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}
