//! Product Variant Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Product Variant UUID
pub type VariantUuid = TypedUuid<ProductVariantRecord>;

/// Product Variant Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductVariantRecord {
    /// Row identifier.
    pub uuid: VariantUuid,

    /// Business identifier, unique across the catalog (e.g. `"250g"`).
    pub variant_id: String,

    /// Display name.
    pub name: String,

    /// Shipping weight in kilograms, always positive.
    pub weight_kg: f64,

    /// Whether the variant is currently sellable.
    pub active: bool,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
