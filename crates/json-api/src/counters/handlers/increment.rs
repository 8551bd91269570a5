//! Record Test Payment Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use storefront_app::domain::counters::QuotaDecision;

use crate::{
    counters::errors::into_status_error, extensions::*, observability::record_quota_rejection,
    state::State,
};

/// Test Payment Recorded Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TestPaymentResponse {
    /// Day the payment was counted against, `YYYY-MM-DD`
    pub day: String,

    /// Test payments counted for the caller on that day, including this one
    pub count: u64,

    /// Daily allowance
    pub limit: u64,

    /// Test payments still allowed today
    pub remaining: u64,
}

/// Record Test Payment Handler
///
/// Counts one test payment for the caller against today's quota. Every
/// attempt is counted, including rejected ones.
#[endpoint(
    tags("counters"),
    summary = "Record Test Payment",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Test payment counted"),
        (status_code = StatusCode::TOO_MANY_REQUESTS, description = "Daily quota exhausted"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "counters.test_payment",
    skip(depot, res),
    fields(admin_uuid = tracing::field::Empty, day = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<TestPaymentResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let admin = depot.admin_uuid_or_401()?;
    let day = state.today();

    let span = tracing::Span::current();

    span.record("admin_uuid", tracing::field::display(admin));
    span.record("day", tracing::field::display(day));

    let counter = state
        .app
        .counters
        .increment(admin, day)
        .await
        .map_err(into_status_error)?;

    match state.quota.check(counter.count) {
        QuotaDecision::Allowed { remaining } => {
            info!(count = counter.count, remaining, "test payment counted");

            res.status_code(StatusCode::CREATED);

            Ok(Json(TestPaymentResponse {
                day: day.to_string(),
                count: counter.count,
                limit: state.quota.limit(),
                remaining,
            }))
        }
        QuotaDecision::Exceeded { limit } => {
            warn!(count = counter.count, limit, "daily test payment quota exhausted");

            record_quota_rejection();

            Err(StatusError::too_many_requests()
                .brief(format!("Daily limit of {limit} test payments reached")))
        }
    }
}
