//! Error bodies and the status mapping shared by every resource.
//!
//! | Kind                  | HTTP | name             |
//! |-----------------------|------|------------------|
//! | missing identity      | 401  | Unauthorized     |
//! | permission denied     | 403  | Forbidden        |
//! | invalid input         | 400  | ValidationError  |
//! | dangling reference    | 400  | InvalidReference |
//! | unknown id            | 404  | NotFound         |
//! | storage/oracle fault  | 500  | InternalError    |
//!
//! The `message` is always the domain error's code (`cart.not_found`, ...).

use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::authorization::errors::AccessError;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

/// Confirmation body for deletions.
#[derive(Object, Debug)]
pub struct MessageResponse {
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Unauthorized,
    Forbidden,
    Validation,
    InvalidReference,
    NotFound,
    Internal,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::Validation | ErrorKind::InvalidReference => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::Validation => "ValidationError",
            ErrorKind::InvalidReference => "InvalidReference",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::Internal => "InternalError",
        }
    }
}

pub fn access_kind(error: &AccessError) -> ErrorKind {
    match error {
        AccessError::Unauthenticated => ErrorKind::Unauthorized,
        AccessError::Forbidden => ErrorKind::Forbidden,
        AccessError::CheckFailed(_) => ErrorKind::Internal,
    }
}

pub fn error_response(kind: ErrorKind, message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (
        kind.status(),
        Json(ErrorResponse {
            name: kind.name().to_string(),
            message: message.into(),
        }),
    )
}

/// Body returned when a path id is not a UUID.
pub fn invalid_id(resource: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: ErrorKind::Validation.name().to_string(),
        message: format!("{resource}.invalid_id"),
    })
}
