//! Backend entry-point: loads settings, wires stores and serves the REST API.

mod server;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use backend::settings::ServerSettings;
use ortho_config::OrthoConfig;

use server::{ServerConfig, create_server};

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

    let settings =
        ServerSettings::load().map_err(|err| std::io::Error::other(err.to_string()))?;
    let bcrypt_cost = settings.bcrypt_cost().map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(settings.bind_addr()).with_bcrypt_cost(bcrypt_cost);

    if let Some(database_url) = settings.database_url().map_err(std::io::Error::other)? {
        if settings.run_migrations {
            run_pending_migrations(&database_url)
                .await
                .map_err(std::io::Error::other)?;
        }
        let pool_config = PoolConfig::new(database_url);
        info!(database = %pool_config.redacted_url(), "connecting to PostgreSQL");
        let pool = DbPool::new(pool_config)
            .await
            .map_err(std::io::Error::other)?;
        config = config.with_db_pool(pool);
    }

    #[cfg(feature = "metrics")]
    {
        config = config.with_metrics(server::build_metrics()?);
    }

    let (host, port) = settings.bind_addr();
    info!(%host, port, "starting HTTP server");

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
