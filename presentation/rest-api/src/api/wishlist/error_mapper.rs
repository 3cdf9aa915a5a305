use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::wishlist::errors::WishlistError;

use crate::api::error::{ErrorKind, ErrorResponse, IntoErrorResponse, access_kind, error_response};

impl IntoErrorResponse for WishlistError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let kind = match &self {
            WishlistError::UserRequired | WishlistError::MalformedProductId => {
                ErrorKind::Validation
            }
            WishlistError::InvalidProduct => ErrorKind::InvalidReference,
            WishlistError::NotFound => ErrorKind::NotFound,
            WishlistError::Access(access) => access_kind(access),
            WishlistError::Repository(_) => ErrorKind::Internal,
        };
        error_response(kind, self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::authorization::errors::AccessError;

    #[test]
    fn should_map_missing_owner_to_validation_error() {
        let (status, body) = WishlistError::UserRequired.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.name, "ValidationError");
        assert_eq!(body.0.message, "wishlist.user_required");
    }

    #[test]
    fn should_map_malformed_product_id_to_validation_error() {
        let (status, body) = WishlistError::MalformedProductId.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.name, "ValidationError");
    }

    #[test]
    fn should_map_unknown_product_to_invalid_reference() {
        let (status, body) = WishlistError::InvalidProduct.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.name, "InvalidReference");
    }

    #[test]
    fn should_map_anonymous_listing_to_unauthorized() {
        let (status, _) = WishlistError::Access(AccessError::Unauthenticated).into_error_response();

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
