//! Service entry-point: configuration, tracing, pool, and server startup.

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use cinetheque::inbound::http::health::HealthState;
use cinetheque::outbound::persistence::{DbPool, PoolConfig};
use cinetheque::server::{ServerConfig, create_server};
use cinetheque::settings::Settings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = Settings::load().map_err(std::io::Error::other)?;
    let bind_addr = settings.bind_addr()?;

    let mut config = ServerConfig::new(bind_addr);
    match settings.database_url.clone() {
        Some(database_url) => {
            let pool_config =
                PoolConfig::new(database_url).with_max_size(settings.db_max_connections());
            let pool = DbPool::new(pool_config)
                .await
                .map_err(std::io::Error::other)?;
            config = config.with_db_pool(pool);
        }
        None => {
            warn!("no database URL configured; using in-memory repositories");
        }
    }

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
