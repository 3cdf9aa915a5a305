use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorKind, ErrorResponse, IntoErrorResponse, access_kind, error_response};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let kind = match &self {
            CartError::Validation(_) | CartError::Pagination(_) => ErrorKind::Validation,
            CartError::InvalidProductOption => ErrorKind::InvalidReference,
            CartError::NotFound => ErrorKind::NotFound,
            CartError::Access(access) => access_kind(access),
            CartError::Repository(_) => ErrorKind::Internal,
        };
        error_response(kind, self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::authorization::errors::AccessError;
    use business::domain::cart::validator::CartValidationError;
    use business::domain::errors::RepositoryError;
    use business::domain::shared::pagination::PaginationError;

    #[test]
    fn should_map_validation_with_field_code() {
        let (status, body) =
            CartError::Validation(CartValidationError::InvalidQuantity).into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.name, "ValidationError");
        assert_eq!(body.0.message, "cart.invalid_quantity");
    }

    #[test]
    fn should_map_malformed_option_id_to_validation_error() {
        let (status, body) = CartError::Validation(CartValidationError::MalformedProductOptionId)
            .into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.name, "ValidationError");
        assert_eq!(body.0.message, "cart.malformed_product_option_id");
    }

    #[test]
    fn should_map_bad_pagination_to_validation_error() {
        let (status, body) =
            CartError::Pagination(PaginationError::InvalidLimit).into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.message, "pagination.invalid_limit");
    }

    #[test]
    fn should_map_unknown_option_to_invalid_reference() {
        let (status, body) = CartError::InvalidProductOption.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.name, "InvalidReference");
    }

    #[test]
    fn should_map_forbidden() {
        let (status, body) = CartError::Access(AccessError::Forbidden).into_error_response();

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body.0.message, "auth.permission_denied");
    }

    #[test]
    fn should_map_oracle_failure_to_internal_error() {
        let (status, body) =
            CartError::Access(AccessError::CheckFailed(RepositoryError::DatabaseError))
                .into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.message, "auth.check_failed");
    }
}
