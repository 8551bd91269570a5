//! Default catalog seeding.
//!
//! Seeding only ever inserts missing variants. A variant that already exists
//! is left untouched, so edits made by an administrator survive restarts.
//! Failures are logged per entry and never abort the pass.

use tracing::{debug, error, info};

use crate::domain::catalog::{
    CatalogService, CatalogServiceError, data::NewProductVariant, records::VariantUuid,
};

/// A catalog entry that must exist after seeding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultVariant {
    pub variant_id: &'static str,
    pub name: &'static str,
    pub weight_kg: f64,
}

/// Pack sizes the storefront sells out of the box.
pub const DEFAULT_VARIANTS: &[DefaultVariant] = &[
    DefaultVariant {
        variant_id: "100g",
        name: "100 g Pouch",
        weight_kg: 0.1,
    },
    DefaultVariant {
        variant_id: "250g",
        name: "250 g Pouch",
        weight_kg: 0.25,
    },
    DefaultVariant {
        variant_id: "500g",
        name: "500 g Jar",
        weight_kg: 0.5,
    },
    DefaultVariant {
        variant_id: "1kg",
        name: "1 kg Bulk Pack",
        weight_kg: 1.0,
    },
];

impl From<&DefaultVariant> for NewProductVariant {
    fn from(default: &DefaultVariant) -> Self {
        Self {
            uuid: VariantUuid::new(),
            variant_id: default.variant_id.to_string(),
            name: default.name.to_string(),
            weight_kg: default.weight_kg,
            active: true,
        }
    }
}

/// Tally of one seeding pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Entries inserted by this pass.
    pub created: usize,

    /// Entries that were already present (including lost insert races).
    pub existing: usize,

    /// Entries whose lookup or creation failed.
    pub failed: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SeedOutcome {
    Created,
    Existing,
    Failed,
}

/// Ensure every entry of `defaults` exists, in order, without overwriting
/// existing rows. Never fails; the returned summary is informational.
#[tracing::instrument(name = "catalog.seed", skip_all, fields(entries = defaults.len()))]
pub async fn seed_variants(
    catalog: &dyn CatalogService,
    defaults: &[DefaultVariant],
) -> SeedSummary {
    let mut summary = SeedSummary::default();

    for default in defaults {
        match seed_variant(catalog, default).await {
            SeedOutcome::Created => summary.created += 1,
            SeedOutcome::Existing => summary.existing += 1,
            SeedOutcome::Failed => summary.failed += 1,
        }
    }

    info!(
        created = summary.created,
        existing = summary.existing,
        failed = summary.failed,
        "catalog seeding finished"
    );

    summary
}

async fn seed_variant(catalog: &dyn CatalogService, default: &DefaultVariant) -> SeedOutcome {
    let variant_id = default.variant_id;

    match catalog.find_variant(variant_id).await {
        Ok(Some(_)) => {
            debug!(variant_id, "variant already present");

            return SeedOutcome::Existing;
        }
        Ok(None) => {}
        Err(source) => {
            error!(variant_id, "failed to look up variant: {source}");

            return SeedOutcome::Failed;
        }
    }

    match catalog.create_variant(default.into()).await {
        Ok(_) => {
            info!(variant_id, "seeded variant");

            SeedOutcome::Created
        }
        Err(CatalogServiceError::AlreadyExists) => {
            debug!(variant_id, "variant created concurrently");

            SeedOutcome::Existing
        }
        Err(source) => {
            error!(variant_id, "failed to create variant: {source}");

            SeedOutcome::Failed
        }
    }
}
