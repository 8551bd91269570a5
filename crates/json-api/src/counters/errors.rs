//! Counter Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::counters::CountersServiceError;

pub(crate) fn into_status_error(error: CountersServiceError) -> StatusError {
    match error {
        // The admin was authenticated moments ago, so a dangling reference
        // means it was deleted mid-request.
        CountersServiceError::InvalidReference => {
            StatusError::unauthorized().brief("Admin no longer exists")
        }
        CountersServiceError::Sql(source) => {
            error!("counter storage error: {source}");

            StatusError::internal_server_error()
        }
        error @ (CountersServiceError::AlreadyExists
        | CountersServiceError::NotFound
        | CountersServiceError::InvalidData) => {
            error!("unexpected counter error: {error}");

            StatusError::internal_server_error()
        }
    }
}
