//! Catalog service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::domain::catalog::{
    data::{NewProductVariant, VariantUpdate},
    errors::CatalogServiceError,
    records::ProductVariantRecord,
    repository::PgCatalogRepository,
};

#[derive(Debug, Clone)]
pub struct PgCatalogService {
    repository: PgCatalogRepository,
}

impl PgCatalogService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgCatalogRepository::new(pool),
        }
    }
}

#[async_trait]
impl CatalogService for PgCatalogService {
    async fn find_variant(
        &self,
        variant_id: &str,
    ) -> Result<Option<ProductVariantRecord>, CatalogServiceError> {
        Ok(self.repository.find_variant(variant_id).await?)
    }

    async fn create_variant(
        &self,
        variant: NewProductVariant,
    ) -> Result<ProductVariantRecord, CatalogServiceError> {
        variant.validate()?;

        Ok(self.repository.create_variant(variant).await?)
    }

    async fn list_variants(&self) -> Result<Vec<ProductVariantRecord>, CatalogServiceError> {
        Ok(self.repository.list_variants().await?)
    }

    async fn update_variant(
        &self,
        variant_id: &str,
        update: VariantUpdate,
    ) -> Result<ProductVariantRecord, CatalogServiceError> {
        update.validate()?;

        Ok(self.repository.update_variant(variant_id, update).await?)
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Looks up a variant by its business identifier.
    async fn find_variant(
        &self,
        variant_id: &str,
    ) -> Result<Option<ProductVariantRecord>, CatalogServiceError>;

    /// Creates a variant; fails with `AlreadyExists` when the identifier is taken.
    async fn create_variant(
        &self,
        variant: NewProductVariant,
    ) -> Result<ProductVariantRecord, CatalogServiceError>;

    /// Lists all variants, lightest first.
    async fn list_variants(&self) -> Result<Vec<ProductVariantRecord>, CatalogServiceError>;

    /// Applies an administrative edit to an existing variant.
    async fn update_variant(
        &self,
        variant_id: &str,
        update: VariantUpdate,
    ) -> Result<ProductVariantRecord, CatalogServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::catalog::{data::VariantDataError, records::VariantUuid},
        test::TestContext,
    };

    use super::*;

    fn new_variant(variant_id: &str, weight_kg: f64) -> NewProductVariant {
        NewProductVariant {
            uuid: VariantUuid::new(),
            variant_id: variant_id.to_string(),
            name: format!("{variant_id} Pack"),
            weight_kg,
            active: true,
        }
    }

    #[tokio::test]
    async fn create_variant_then_find_returns_it() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx.catalog.create_variant(new_variant("250g", 0.25)).await?;
        let found = ctx.catalog.find_variant("250g").await?;

        assert_eq!(found.as_ref(), Some(&created));
        assert!(created.active);
        assert!((created.weight_kg - 0.25).abs() < f64::EPSILON);

        Ok(())
    }

    #[tokio::test]
    async fn find_variant_unknown_id_returns_none() -> TestResult {
        let ctx = TestContext::new().await;

        assert!(ctx.catalog.find_variant("missing").await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn create_variant_duplicate_id_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.catalog.create_variant(new_variant("500g", 0.5)).await?;

        let result = ctx.catalog.create_variant(new_variant("500g", 0.75)).await;

        assert!(
            matches!(result, Err(CatalogServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_variant_non_positive_weight_is_rejected() {
        let ctx = TestContext::new().await;

        let result = ctx.catalog.create_variant(new_variant("0g", 0.0)).await;

        assert!(
            matches!(
                result,
                Err(CatalogServiceError::InvalidVariant(
                    VariantDataError::NonPositiveWeight
                ))
            ),
            "expected NonPositiveWeight, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_variants_orders_by_weight() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.catalog.create_variant(new_variant("1kg", 1.0)).await?;
        ctx.catalog.create_variant(new_variant("100g", 0.1)).await?;

        let ids: Vec<String> = ctx
            .catalog
            .list_variants()
            .await?
            .into_iter()
            .map(|variant| variant.variant_id)
            .collect();

        assert_eq!(ids, ["100g", "1kg"]);

        Ok(())
    }

    #[tokio::test]
    async fn update_variant_changes_only_given_fields() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.catalog.create_variant(new_variant("250g", 0.25)).await?;

        let updated = ctx
            .catalog
            .update_variant(
                "250g",
                VariantUpdate {
                    name: Some("Quarter Kilo".to_string()),
                    active: Some(false),
                    ..VariantUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.name, "Quarter Kilo");
        assert!(!updated.active);
        assert!((updated.weight_kg - 0.25).abs() < f64::EPSILON);
        assert!(updated.updated_at >= updated.created_at);

        Ok(())
    }

    #[tokio::test]
    async fn update_variant_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .catalog
            .update_variant("missing", VariantUpdate::default())
            .await;

        assert!(
            matches!(result, Err(CatalogServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
