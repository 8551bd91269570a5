//! State

use std::sync::Arc;

use jiff::tz::TimeZone;
use storefront_app::{
    context::AppContext,
    domain::counters::{CounterDay, DailyQuota},
};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) quota: DailyQuota,
    pub(crate) time_zone: TimeZone,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, quota: DailyQuota, time_zone: TimeZone) -> Self {
        Self {
            app,
            quota,
            time_zone,
        }
    }

    #[must_use]
    pub(crate) fn shared(app: AppContext, quota: DailyQuota, time_zone: TimeZone) -> Arc<Self> {
        Arc::new(Self::new(app, quota, time_zone))
    }

    /// The counter day that is current in the configured time zone.
    pub(crate) fn today(&self) -> CounterDay {
        CounterDay::today_in(&self.time_zone)
    }
}
