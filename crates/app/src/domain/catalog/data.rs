//! Product Variant Data

use thiserror::Error;

use crate::domain::catalog::records::VariantUuid;

/// Reasons a variant payload is rejected before it reaches storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VariantDataError {
    #[error("variant id must not be blank")]
    BlankVariantId,

    #[error("variant name must not be blank")]
    BlankName,

    #[error("variant weight must be a positive number of kilograms")]
    NonPositiveWeight,
}

/// New Product Variant Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProductVariant {
    pub uuid: VariantUuid,
    pub variant_id: String,
    pub name: String,
    pub weight_kg: f64,
    pub active: bool,
}

impl NewProductVariant {
    /// Check the row invariants enforced by the `product_variants` table.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), VariantDataError> {
        if self.variant_id.trim().is_empty() {
            return Err(VariantDataError::BlankVariantId);
        }

        if self.name.trim().is_empty() {
            return Err(VariantDataError::BlankName);
        }

        validate_weight(self.weight_kg)
    }
}

/// Partial Product Variant Update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantUpdate {
    pub name: Option<String>,
    pub weight_kg: Option<f64>,
    pub active: Option<bool>,
}

impl VariantUpdate {
    /// Check the fields that are present.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), VariantDataError> {
        if self.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(VariantDataError::BlankName);
        }

        self.weight_kg.map_or(Ok(()), validate_weight)
    }
}

fn validate_weight(weight_kg: f64) -> Result<(), VariantDataError> {
    if weight_kg.is_finite() && weight_kg > 0.0 {
        Ok(())
    } else {
        Err(VariantDataError::NonPositiveWeight)
    }
}
