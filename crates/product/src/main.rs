use anyhow::{Context, Result};
use product::{
    config::myconfig::Config, handler::AppRouter, repository::run_migrations, state::AppState,
};
use shared::{config::ConnectionManager, utils::init_logger};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    let _log_guard = init_logger("product-service", is_dev, is_enable_file);

    if let Err(e) = run().await {
        error!("💀 Product service terminated: {e:?}");
        return Err(e);
    }

    Ok(())
}

async fn run() -> Result<()> {
    info!("🚀 Starting Product Service initialization...");

    let config = Config::init().context("Failed to load configuration")?;

    let db_pool = ConnectionManager::new_pool(&config.database_url, config.db_max_conn)
        .context("Failed to initialize database pool")?;

    match run_migrations(&db_pool).await {
        Ok(()) => info!("✅ Database schema ready at {}", config.database_url),
        Err(e) => warn!(
            "⚠️ Failed to initialize database schema at {}: {e}. Requests will report storage errors.",
            config.database_url
        ),
    }

    let state = AppState::new(db_pool);

    info!("✅ Application setup completed successfully.");

    AppRouter::serve(config.addr(), state)
        .await
        .context("Failed to start server")?;

    info!("✅ Product Service shutdown complete.");
    Ok(())
}
