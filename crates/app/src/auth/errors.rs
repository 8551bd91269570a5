//! Auth service errors.

use sqlx::Error;
use thiserror::Error;

use crate::auth::{ApiTokenError, TokenHasherError};

#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// Token is malformed, unknown, revoked, expired, or does not verify.
    #[error("token not found")]
    NotFound,

    #[error("token expiry must be in the future")]
    InvalidExpiry,

    #[error("admin not found")]
    UnknownAdmin,

    #[error("storage error")]
    Sql(#[source] Error),

    #[error("token processing error")]
    Token(#[source] ApiTokenError),

    #[error("token hasher error")]
    Hasher(#[from] TokenHasherError),
}

impl From<Error> for AuthServiceError {
    fn from(error: Error) -> Self {
        let foreign_key_violation = error
            .as_database_error()
            .is_some_and(|database_error| database_error.is_foreign_key_violation());

        if foreign_key_violation {
            return Self::UnknownAdmin;
        }

        Self::Sql(error)
    }
}

impl From<ApiTokenError> for AuthServiceError {
    fn from(error: ApiTokenError) -> Self {
        Self::Token(error)
    }
}
