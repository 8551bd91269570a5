//! Counter Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    counters::{errors::into_status_error, get::CounterResponse},
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CountersResponse {
    /// Days with at least one counted event, most recent first
    pub counters: Vec<CounterResponse>,
}

/// Counter Index Handler
#[endpoint(
    tags("counters"),
    summary = "List Daily Counts",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CountersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let admin = depot.admin_uuid_or_401()?;

    let counters = state
        .app
        .counters
        .list_counters(admin)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CountersResponse {
        counters: counters
            .into_iter()
            .map(|counter| CounterResponse {
                day: counter.day.to_string(),
                count: counter.count,
            })
            .collect(),
    }))
}
