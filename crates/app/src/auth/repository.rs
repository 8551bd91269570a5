//! Auth repository.

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::{
    auth::{ApiTokenMetadata, ApiTokenVersion, NewApiToken, models::ActiveApiToken},
    domain::admins::records::AdminUuid,
};

const CREATE_API_TOKEN_SQL: &str = include_str!("sql/create_api_token.sql");
const FIND_ACTIVE_API_TOKEN_SQL: &str = include_str!("sql/find_active_api_token.sql");
const LIST_API_TOKENS_BY_ADMIN_SQL: &str = include_str!("sql/list_api_tokens_by_admin.sql");
const REVOKE_API_TOKEN_SQL: &str = include_str!("sql/revoke_api_token.sql");
const TOUCH_API_TOKEN_LAST_USED_SQL: &str = include_str!("sql/touch_api_token_last_used.sql");

#[derive(Debug, Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create_api_token(
        &self,
        token: &NewApiToken,
    ) -> Result<ApiTokenMetadata, sqlx::Error> {
        query_as::<Postgres, ApiTokenMetadata>(CREATE_API_TOKEN_SQL)
            .bind(token.uuid)
            .bind(token.admin_uuid.into_uuid())
            .bind(token.version.as_i16())
            .bind(&token.token_hash)
            .bind(SqlxTimestamp::from(token.expires_at))
            .fetch_one(&self.pool)
            .await
    }

    /// Token that is neither revoked nor expired and whose admin is active.
    pub(crate) async fn find_active_api_token(
        &self,
        token_uuid: Uuid,
        version: ApiTokenVersion,
    ) -> Result<Option<ActiveApiToken>, sqlx::Error> {
        query_as::<Postgres, ActiveApiToken>(FIND_ACTIVE_API_TOKEN_SQL)
            .bind(token_uuid)
            .bind(version.as_i16())
            .fetch_optional(&self.pool)
            .await
    }

    /// List token metadata for an admin, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_api_tokens_by_admin(
        &self,
        admin: AdminUuid,
    ) -> Result<Vec<ApiTokenMetadata>, sqlx::Error> {
        query_as::<Postgres, ApiTokenMetadata>(LIST_API_TOKENS_BY_ADMIN_SQL)
            .bind(admin.into_uuid())
            .fetch_all(&self.pool)
            .await
    }

    /// Revoke an active token; `None` when it was unknown or already revoked.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn revoke_api_token(
        &self,
        token_uuid: Uuid,
    ) -> Result<Option<ApiTokenMetadata>, sqlx::Error> {
        query_as::<Postgres, ApiTokenMetadata>(REVOKE_API_TOKEN_SQL)
            .bind(token_uuid)
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn touch_api_token_last_used(
        &self,
        token_uuid: Uuid,
    ) -> Result<(), sqlx::Error> {
        query(TOUCH_API_TOKEN_LAST_USED_SQL)
            .bind(token_uuid)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn decode_version(row: &PgRow) -> sqlx::Result<ApiTokenVersion> {
    let version: i16 = row.try_get("version")?;

    ApiTokenVersion::try_from(version).map_err(|e| sqlx::Error::ColumnDecode {
        index: "version".to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for ActiveApiToken {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            admin_uuid: AdminUuid::from_uuid(row.try_get("admin_uuid")?),
            version: decode_version(row)?,
            token_hash: row.try_get("token_hash")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ApiTokenMetadata {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            admin_uuid: AdminUuid::from_uuid(row.try_get("admin_uuid")?),
            version: decode_version(row)?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            last_used_at: row
                .try_get::<Option<SqlxTimestamp>, _>("last_used_at")?
                .map(SqlxTimestamp::to_jiff),
            expires_at: row.try_get::<SqlxTimestamp, _>("expires_at")?.to_jiff(),
            revoked_at: row
                .try_get::<Option<SqlxTimestamp>, _>("revoked_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
