//! Storefront JSON API Server

use std::{process, sync::Arc};

use salvo::prelude::*;
use thiserror::Error;
use tracing::{error, info, warn};

use storefront_app::{
    auth::OpenBaoTransit,
    context::AppContext,
    database,
    domain::{
        catalog::seed::{DEFAULT_VARIANTS, seed_variants},
        counters::DailyQuota,
    },
};

use crate::{config::ServerConfig, observability::Observability, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod auth;
mod config;
mod counters;
mod extensions;
mod healthcheck;
mod observability;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;
mod variants;

#[derive(Debug, Error)]
enum StartupError {
    #[error("invalid counter time zone: {0}")]
    TimeZone(#[source] jiff::Error),

    #[error("failed to connect to database: {0}")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations: {0}")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

/// Storefront JSON API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    let observability = Observability::init(&config).unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "the subscriber failed to install, so tracing output would be lost"
        )]
        {
            eprintln!("Observability error: {e}");
        }

        process::exit(1);
    });

    let state = match prepare_state(&config).await {
        Ok(state) => state,
        Err(startup_error) => {
            error!("failed to start server: {startup_error}");

            process::exit(1);
        }
    };

    let addr = config.socket_addr();
    let grace = config.server.shutdown_grace();

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle, grace).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(router::service(state)).await;

    observability.shutdown();
}

/// Connect, migrate and seed according to `config`, then build shared state.
async fn prepare_state(config: &ServerConfig) -> Result<Arc<State>, StartupError> {
    let time_zone = config.quota.time_zone().map_err(StartupError::TimeZone)?;

    let pool = database::connect_with(
        &config.database.database_url,
        config.database.max_connections,
    )
    .await
    .map_err(StartupError::Database)?;

    if config.database.run_migrations {
        database::migrate(&pool)
            .await
            .map_err(StartupError::Migrate)?;
    }

    let hasher = Arc::new(OpenBaoTransit::new(config.auth.clone().into()));

    let app = AppContext::from_pool(pool, hasher);

    if config.catalog.seed_catalog {
        let summary = seed_variants(app.catalog.as_ref(), DEFAULT_VARIANTS).await;

        if summary.failed > 0 {
            warn!(
                failed = summary.failed,
                "catalog seeding left some variants missing; serving anyway"
            );
        }
    }

    Ok(State::shared(
        app,
        DailyQuota::new(config.quota.daily_limit),
        time_zone,
    ))
}
