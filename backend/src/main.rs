//! Directory service entry-point: loads settings, wires storage and serves HTTP.

mod server;

use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use directory_backend::domain::{Auditor, StaticCurrentActor};
use directory_backend::inbound::http::health::HealthState;
use directory_backend::outbound::persistence::{DbPool, run_pending_migrations};

use server::{ServerConfig, ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        ServerSettings::load().map_err(|err| eyre!("failed to load settings: {err}"))?;

    let auditor = Auditor::new(
        Arc::new(DefaultClock),
        Arc::new(StaticCurrentActor::new(settings.system_actor()?)),
    );
    let bind_addr = settings.bind_addr()?;
    let mut config = ServerConfig::new(bind_addr, auditor, settings.cors());

    if let Some(pool_config) = settings.pool_config() {
        if settings.run_migrations {
            let applied = run_pending_migrations(pool_config.database_url())
                .await
                .wrap_err("database migration failed")?;
            info!(applied, "database schema up to date");
        }
        let pool = DbPool::new(pool_config)
            .await
            .wrap_err("database pool construction failed")?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting directory server");
    let server = create_server(health_state.clone(), config)?;
    server.await?;
    health_state.mark_unhealthy();
    Ok(())
}
