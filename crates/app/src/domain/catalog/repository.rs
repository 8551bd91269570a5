//! Catalog Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::domain::catalog::{
    data::{NewProductVariant, VariantUpdate},
    records::{ProductVariantRecord, VariantUuid},
};

const FIND_VARIANT_SQL: &str = include_str!("sql/find_variant.sql");
const CREATE_VARIANT_SQL: &str = include_str!("sql/create_variant.sql");
const LIST_VARIANTS_SQL: &str = include_str!("sql/list_variants.sql");
const UPDATE_VARIANT_SQL: &str = include_str!("sql/update_variant.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(name = "catalog.repository.find_variant", skip(self), err)]
    pub(crate) async fn find_variant(
        &self,
        variant_id: &str,
    ) -> Result<Option<ProductVariantRecord>, sqlx::Error> {
        query_as::<Postgres, ProductVariantRecord>(FIND_VARIANT_SQL)
            .bind(variant_id)
            .fetch_optional(&self.pool)
            .await
    }

    #[tracing::instrument(
        name = "catalog.repository.create_variant",
        skip(self, variant),
        fields(variant_id = %variant.variant_id),
        err
    )]
    pub(crate) async fn create_variant(
        &self,
        variant: NewProductVariant,
    ) -> Result<ProductVariantRecord, sqlx::Error> {
        query_as::<Postgres, ProductVariantRecord>(CREATE_VARIANT_SQL)
            .bind(variant.uuid.into_uuid())
            .bind(variant.variant_id)
            .bind(variant.name)
            .bind(variant.weight_kg)
            .bind(variant.active)
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn list_variants(&self) -> Result<Vec<ProductVariantRecord>, sqlx::Error> {
        query_as::<Postgres, ProductVariantRecord>(LIST_VARIANTS_SQL)
            .fetch_all(&self.pool)
            .await
    }

    #[tracing::instrument(name = "catalog.repository.update_variant", skip(self, update), err)]
    pub(crate) async fn update_variant(
        &self,
        variant_id: &str,
        update: VariantUpdate,
    ) -> Result<ProductVariantRecord, sqlx::Error> {
        query_as::<Postgres, ProductVariantRecord>(UPDATE_VARIANT_SQL)
            .bind(variant_id)
            .bind(update.name)
            .bind(update.weight_kg)
            .bind(update.active)
            .fetch_one(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ProductVariantRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: VariantUuid::from_uuid(row.try_get("uuid")?),
            variant_id: row.try_get("variant_id")?,
            name: row.try_get("name")?,
            weight_kg: row.try_get("weight_kg")?,
            active: row.try_get("active")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
