//! Update Variant Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::catalog::data::VariantUpdate;

use crate::{
    extensions::*, state::State, variants::errors::into_status_error,
    variants::get::VariantResponse,
};

/// Update Variant Request
///
/// Omitted fields keep their stored value.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateVariantRequest {
    /// New display name
    #[serde(default)]
    pub name: Option<String>,

    /// New pack weight in kilograms
    #[serde(default)]
    pub weight_kg: Option<f64>,

    /// Offer or withdraw the variant
    #[serde(default)]
    pub active: Option<bool>,
}

impl From<UpdateVariantRequest> for VariantUpdate {
    fn from(request: UpdateVariantRequest) -> Self {
        VariantUpdate {
            name: request.name,
            weight_kg: request.weight_kg,
            active: request.active,
        }
    }
}

/// Variant Update Handler
#[endpoint(
    tags("variants"),
    summary = "Update Variant",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Variant updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Variant not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "variants.update",
    skip(variant_id, json, depot),
    fields(
        admin_uuid = tracing::field::Empty,
        variant_id = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    variant_id: PathParam<String>,
    json: JsonBody<UpdateVariantRequest>,
    depot: &mut Depot,
) -> Result<Json<VariantResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let admin = depot.admin_uuid_or_401()?;
    let variant_id = variant_id.into_inner();

    let span = tracing::Span::current();

    span.record("admin_uuid", tracing::field::display(admin));
    span.record("variant_id", tracing::field::display(&variant_id));

    let variant = state
        .app
        .catalog
        .update_variant(&variant_id, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(
        variant_id = %variant.variant_id,
        active = variant.active,
        "updated variant"
    );

    Ok(Json(variant.into()))
}
