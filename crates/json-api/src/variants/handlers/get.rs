//! Get Variant Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::catalog::records::ProductVariantRecord;

use crate::{extensions::*, state::State, variants::errors::into_status_error};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VariantResponse {
    /// Internal identifier of the variant
    pub uuid: Uuid,

    /// Stable business identifier, e.g. `250g`
    pub variant_id: String,

    /// Display name
    pub name: String,

    /// Pack weight in kilograms
    pub weight_kg: f64,

    /// Whether the variant is offered for sale
    pub active: bool,

    /// The date and time the variant was created
    pub created_at: String,

    /// The date and time the variant was last updated
    pub updated_at: String,
}

impl From<ProductVariantRecord> for VariantResponse {
    fn from(variant: ProductVariantRecord) -> Self {
        VariantResponse {
            uuid: variant.uuid.into_uuid(),
            variant_id: variant.variant_id,
            name: variant.name,
            weight_kg: variant.weight_kg,
            active: variant.active,
            created_at: variant.created_at.to_string(),
            updated_at: variant.updated_at.to_string(),
        }
    }
}

/// Get Variant Handler
///
/// Returns a single variant by its business identifier.
#[endpoint(
    tags("variants"),
    summary = "Get Variant",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Variant found"),
        (status_code = StatusCode::NOT_FOUND, description = "Variant not found"),
    ),
)]
pub(crate) async fn handler(
    variant_id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<VariantResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let variant = state
        .app
        .catalog
        .find_variant(&variant_id.into_inner())
        .await
        .map_err(into_status_error)?
        .ok_or_else(|| StatusError::not_found().brief("Variant not found"))?;

    Ok(Json(variant.into()))
}
