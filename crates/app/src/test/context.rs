//! Test context for service-level integration tests.

use crate::domain::{
    admins::{AdminsService, PgAdminsService, data::NewAdmin, records::AdminUuid},
    catalog::PgCatalogService,
    counters::PgCountersService,
};

use super::db::TestDb;

/// Services wired against a private database with one admin already present.
pub(crate) struct TestContext {
    pub db: TestDb,
    pub admin_uuid: AdminUuid,
    pub admins: PgAdminsService,
    pub catalog: PgCatalogService,
    pub counters: PgCountersService,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        let db = TestDb::new().await;
        let pool = db.pool().clone();

        let admins = PgAdminsService::new(pool.clone());

        let admin_uuid = AdminUuid::new();

        admins
            .create_admin(NewAdmin {
                uuid: admin_uuid,
                name: "Test Admin".to_string(),
            })
            .await
            .expect("Failed to create default test admin");

        Self {
            catalog: PgCatalogService::new(pool.clone()),
            counters: PgCountersService::new(pool),
            admins,
            admin_uuid,
            db,
        }
    }

    /// Create an additional admin.
    pub(crate) async fn create_admin(&self, name: &str) -> AdminUuid {
        let uuid = AdminUuid::new();

        self.admins
            .create_admin(NewAdmin {
                uuid,
                name: name.to_string(),
            })
            .await
            .expect("Failed to create test admin");

        uuid
    }
}
