use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use fisiogest::api::{clinic_api_router, ApiContext};
use fisiogest::config;
use fisiogest::db::sqlite::open_database;
use fisiogest::store::{seed, JsonFileStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    std::fs::create_dir_all(config::app_data_dir())?;
    let conn = open_database(&config::database_path())?;

    let appointments = Arc::new(JsonFileStore::new(
        config::appointments_store_path(),
        seed::seed_appointments(),
    ));

    let app = clinic_api_router(ApiContext::new(conn, appointments));

    let listener = tokio::net::TcpListener::bind(config::API_ADDR).await?;
    tracing::info!(addr = %config::API_ADDR, "API server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
