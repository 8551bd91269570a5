//! Admins Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::domain::admins::{
    data::NewAdmin,
    records::{AdminRecord, AdminUuid},
};

const CREATE_ADMIN_SQL: &str = include_str!("sql/create_admin.sql");
const GET_ADMIN_SQL: &str = include_str!("sql/get_admin.sql");

/// PostgreSQL-backed admins repository.
#[derive(Debug, Clone)]
pub(crate) struct PgAdminsRepository {
    pool: PgPool,
}

impl PgAdminsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(name = "admins.repository.create_admin", skip(self, admin), err)]
    pub(crate) async fn create_admin(&self, admin: NewAdmin) -> Result<AdminRecord, sqlx::Error> {
        query_as::<Postgres, AdminRecord>(CREATE_ADMIN_SQL)
            .bind(admin.uuid.into_uuid())
            .bind(admin.name)
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn get_admin(&self, admin: AdminUuid) -> Result<AdminRecord, sqlx::Error> {
        query_as::<Postgres, AdminRecord>(GET_ADMIN_SQL)
            .bind(admin.into_uuid())
            .fetch_one(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for AdminRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: AdminUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
