//! Admins service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::domain::admins::{
    data::NewAdmin,
    errors::AdminsServiceError,
    records::{AdminRecord, AdminUuid},
    repository::PgAdminsRepository,
};

#[derive(Debug, Clone)]
pub struct PgAdminsService {
    repository: PgAdminsRepository,
}

impl PgAdminsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAdminsRepository::new(pool),
        }
    }
}

#[async_trait]
impl AdminsService for PgAdminsService {
    async fn create_admin(&self, admin: NewAdmin) -> Result<AdminRecord, AdminsServiceError> {
        if admin.name.trim().is_empty() {
            return Err(AdminsServiceError::InvalidData);
        }

        self.repository
            .create_admin(admin)
            .await
            .map_err(Into::into)
    }

    async fn get_admin(&self, admin: AdminUuid) -> Result<AdminRecord, AdminsServiceError> {
        self.repository.get_admin(admin).await.map_err(Into::into)
    }
}

/// Admin persistence operations.
#[automock]
#[async_trait]
pub trait AdminsService: Send + Sync {
    /// Creates a new admin.
    async fn create_admin(&self, admin: NewAdmin) -> Result<AdminRecord, AdminsServiceError>;

    /// Retrieves an active admin.
    async fn get_admin(&self, admin: AdminUuid) -> Result<AdminRecord, AdminsServiceError>;
}
