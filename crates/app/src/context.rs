//! App Context

use std::sync::Arc;

use sqlx::PgPool;
use thiserror::Error;

use crate::{
    auth::{AuthService, OpenBaoConfig, OpenBaoTransit, PgAuthService, TokenHasher},
    database,
    domain::{
        admins::{AdminsService, PgAdminsService},
        catalog::{CatalogService, PgCatalogService},
        counters::{CountersService, PgCountersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

/// Service handles shared by every request.
#[derive(Clone)]
pub struct AppContext {
    pub admins: Arc<dyn AdminsService>,
    pub catalog: Arc<dyn CatalogService>,
    pub counters: Arc<dyn CountersService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str, openbao: OpenBaoConfig) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::from_pool(pool, Arc::new(OpenBaoTransit::new(openbao))))
    }

    /// Wire Postgres-backed services over an existing pool.
    #[must_use]
    pub fn from_pool(pool: PgPool, hasher: Arc<dyn TokenHasher>) -> Self {
        Self {
            admins: Arc::new(PgAdminsService::new(pool.clone())),
            catalog: Arc::new(PgCatalogService::new(pool.clone())),
            counters: Arc::new(PgCountersService::new(pool.clone())),
            auth: Arc::new(PgAuthService::new(pool, hasher)),
        }
    }
}
