use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::category::errors::CategoryError;

use crate::api::error::{ErrorKind, ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CategoryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let kind = match &self {
            CategoryError::NotFound => ErrorKind::NotFound,
            CategoryError::Repository(_) => ErrorKind::Internal,
        };
        error_response(kind, self.to_string())
    }
}
