//! Get Counter Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::counters::CounterDay;

use crate::{counters::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CounterResponse {
    /// Calendar day, `YYYY-MM-DD`
    pub day: String,

    /// Events counted on that day
    pub count: u64,
}

/// Get Counter Handler
///
/// Returns the caller's count for one day; zero when nothing was counted.
#[endpoint(
    tags("counters"),
    summary = "Get Daily Count",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Count for the day"),
        (status_code = StatusCode::BAD_REQUEST, description = "Day is not YYYY-MM-DD"),
    ),
)]
pub(crate) async fn handler(
    day: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CounterResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let admin = depot.admin_uuid_or_401()?;

    let day = day
        .into_inner()
        .parse::<CounterDay>()
        .or_400("day must be a calendar date formatted as YYYY-MM-DD")?;

    let count = state
        .app
        .counters
        .get_count(admin, day)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CounterResponse {
        day: day.to_string(),
        count,
    }))
}
