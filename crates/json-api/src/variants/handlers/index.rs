//! Variant Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, state::State, variants::get::VariantResponse};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VariantsResponse {
    /// Every variant, lightest first
    pub variants: Vec<VariantResponse>,
}

/// Variant Index Handler
///
/// Returns the whole catalog, including inactive variants.
#[endpoint(
    tags("variants"),
    summary = "List Variants",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<VariantsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let variants = state
        .app
        .catalog
        .list_variants()
        .await
        .or_500("failed to fetch variants")?;

    Ok(Json(VariantsResponse {
        variants: variants.into_iter().map(Into::into).collect(),
    }))
}
