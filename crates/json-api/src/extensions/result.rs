//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::{debug, error};

/// Map errors to HTTP status errors.
pub(crate) trait ResultExt<T> {
    /// Log the error and answer 500.
    fn or_500(self, context: &str) -> Result<T, StatusError>;

    /// Answer 400 with `brief` as the client-facing message.
    fn or_400(self, brief: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error()
        })
    }

    fn or_400(self, brief: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            debug!("{brief}: {error}");

            StatusError::bad_request().brief(brief)
        })
    }
}
