use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorKind, ErrorResponse, IntoErrorResponse, access_kind, error_response};

pub fn product_error_kind(error: &ProductError) -> ErrorKind {
    match error {
        ProductError::NameRequired
        | ProductError::NameEmpty
        | ProductError::PriceRequired
        | ProductError::PricePrecision
        | ProductError::StockRequired
        | ProductError::MalformedCategoryId => ErrorKind::Validation,
        ProductError::InvalidCategory => ErrorKind::InvalidReference,
        ProductError::NotFound | ProductError::OptionNotFound | ProductError::CategoryNotFound => {
            ErrorKind::NotFound
        }
        ProductError::Access(access) => access_kind(access),
        ProductError::Repository(_) => ErrorKind::Internal,
    }
}

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        error_response(product_error_kind(&self), self.to_string())
    }
}
