//! Variant Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::catalog::CatalogServiceError;

pub(crate) fn into_status_error(error: CatalogServiceError) -> StatusError {
    match error {
        CatalogServiceError::NotFound => StatusError::not_found().brief("Variant not found"),
        CatalogServiceError::AlreadyExists => {
            StatusError::conflict().brief("Variant already exists")
        }
        CatalogServiceError::InvalidVariant(reason) => {
            StatusError::bad_request().brief(reason.to_string())
        }
        CatalogServiceError::MissingRequiredData | CatalogServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid variant payload")
        }
        CatalogServiceError::Sql(source) => {
            error!("catalog storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;
    use storefront_app::domain::catalog::data::VariantDataError;

    use super::*;

    #[test]
    fn validation_reason_reaches_the_client() {
        let error = into_status_error(CatalogServiceError::InvalidVariant(
            VariantDataError::NonPositiveWeight,
        ));

        assert_eq!(error.code, StatusCode::BAD_REQUEST);
        assert_eq!(
            error.brief,
            "variant weight must be a positive number of kilograms"
        );
    }

    #[test]
    fn storage_errors_are_opaque() {
        let error = into_status_error(CatalogServiceError::Sql(sqlx::Error::PoolTimedOut));

        assert_eq!(error.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!error.brief.contains("pool"), "storage detail must not leak");
    }
}
