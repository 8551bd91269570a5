//! Catalog service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::catalog::data::VariantDataError;

#[derive(Debug, Error)]
pub enum CatalogServiceError {
    #[error("variant already exists")]
    AlreadyExists,

    #[error("variant not found")]
    NotFound,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("invalid variant: {0}")]
    InvalidVariant(#[from] VariantDataError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CatalogServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
