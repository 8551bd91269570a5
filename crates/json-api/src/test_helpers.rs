//! Test helpers.

use std::sync::Arc;

use jiff::{Timestamp, tz::TimeZone};
use salvo::{affix_state::inject, prelude::*};
use storefront_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        admins::{MockAdminsService, records::AdminUuid},
        catalog::{
            MockCatalogService,
            records::{ProductVariantRecord, VariantUuid},
        },
        counters::{
            CounterDay, DailyQuota, MockCountersService,
            records::{CounterUuid, DailyCounterRecord},
        },
    },
};
use uuid::Uuid;

use crate::{extensions::*, state::State};

pub(crate) const TEST_ADMIN_UUID: AdminUuid = AdminUuid::from_uuid(Uuid::nil());

pub(crate) const TEST_DAILY_LIMIT: u64 = 3;

#[salvo::handler]
pub(crate) async fn inject_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_admin_uuid(TEST_ADMIN_UUID);
    ctrl.call_next(req, depot, res).await;
}

/// Mocks that fail the test on any call not explicitly expected.
pub(crate) struct Mocks {
    pub(crate) catalog: MockCatalogService,
    pub(crate) counters: MockCountersService,
    pub(crate) auth: MockAuthService,
}

impl Mocks {
    pub(crate) fn strict() -> Self {
        let mut catalog = MockCatalogService::new();

        catalog.expect_find_variant().never();
        catalog.expect_create_variant().never();
        catalog.expect_list_variants().never();
        catalog.expect_update_variant().never();

        let mut counters = MockCountersService::new();

        counters.expect_increment().never();
        counters.expect_get_count().never();
        counters.expect_list_counters().never();

        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer().never();

        Self {
            catalog,
            counters,
            auth,
        }
    }

    pub(crate) fn into_state(self) -> Arc<State> {
        let mut admins = MockAdminsService::new();

        admins.expect_create_admin().never();
        admins.expect_get_admin().never();

        let app = AppContext {
            admins: Arc::new(admins),
            catalog: Arc::new(self.catalog),
            counters: Arc::new(self.counters),
            auth: Arc::new(self.auth),
        };

        State::shared(app, DailyQuota::new(TEST_DAILY_LIMIT), TimeZone::UTC)
    }
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    Mocks {
        auth,
        ..Mocks::strict()
    }
    .into_state()
}

/// Serve `route` as an already authenticated admin.
pub(crate) fn authenticated_service(mocks: Mocks, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(mocks.into_state()))
            .hoop(inject_admin)
            .push(route),
    )
}

pub(crate) fn catalog_service(catalog: MockCatalogService, route: Router) -> Service {
    authenticated_service(
        Mocks {
            catalog,
            ..Mocks::strict()
        },
        route,
    )
}

pub(crate) fn counters_service(counters: MockCountersService, route: Router) -> Service {
    authenticated_service(
        Mocks {
            counters,
            ..Mocks::strict()
        },
        route,
    )
}

pub(crate) fn make_variant(variant_id: &str, weight_kg: f64) -> ProductVariantRecord {
    ProductVariantRecord {
        uuid: VariantUuid::new(),
        variant_id: variant_id.to_string(),
        name: format!("{variant_id} pack"),
        weight_kg,
        active: true,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_counter(day: CounterDay, count: u64) -> DailyCounterRecord {
    DailyCounterRecord {
        uuid: CounterUuid::new(),
        admin_uuid: TEST_ADMIN_UUID,
        day,
        count,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
