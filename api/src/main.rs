use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::{info, warn};

use inv_api::middleware::create_cors;
use inv_api::telemetry::init_tracing;
use inv_api::{create_app, AppState};
use inv_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);

    config.validate().map_err(anyhow::Error::msg)?;
    if config.jwt.is_using_default_secret() {
        warn!("Using the built-in development JWT secret");
    }

    info!(
        environment = %config.environment,
        backend = ?config.database.backend,
        "Starting inventory API server"
    );

    let state = AppState::from_config(&config)
        .await
        .context("failed to initialize storage")?;
    let state = web::Data::new(state);

    let environment = config.environment;
    let allowed_origins = config.server.allowed_origins.clone();
    let mut server = HttpServer::new(move || {
        create_app(state.clone(), create_cors(environment, &allowed_origins))
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
