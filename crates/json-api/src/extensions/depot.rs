//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use storefront_app::domain::admins::records::AdminUuid;

const ADMIN_UUID_DEPOT_KEY: &str = "admin_uuid";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Record the admin resolved by authentication.
    fn insert_admin_uuid(&mut self, admin: AdminUuid);

    /// The authenticated admin; 401 when authentication did not run.
    fn admin_uuid_or_401(&self) -> Result<AdminUuid, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_admin_uuid(&mut self, admin: AdminUuid) {
        self.insert(ADMIN_UUID_DEPOT_KEY, admin);
    }

    fn admin_uuid_or_401(&self) -> Result<AdminUuid, StatusError> {
        self.get::<AdminUuid>(ADMIN_UUID_DEPOT_KEY)
            .copied()
            .map_err(|_ignored| StatusError::unauthorized())
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[test]
    fn admin_uuid_round_trips_through_depot() {
        let admin = AdminUuid::from_uuid(Uuid::from_u128(7));
        let mut depot = Depot::new();

        depot.insert_admin_uuid(admin);

        assert_eq!(depot.admin_uuid_or_401().ok(), Some(admin), "admin should be present");
    }

    #[test]
    fn missing_admin_is_unauthorized() {
        let depot = Depot::new();

        let error = depot.admin_uuid_or_401().err();

        assert_eq!(
            error.map(|error| error.code),
            Some(salvo::http::StatusCode::UNAUTHORIZED),
            "missing admin should be a 401"
        );
    }
}
