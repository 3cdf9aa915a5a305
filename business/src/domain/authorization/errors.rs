/// Authentication and authorization failures shared by every resource.
#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    #[error("auth.unauthenticated")]
    Unauthenticated,
    #[error("auth.permission_denied")]
    Forbidden,
    #[error("auth.check_failed")]
    CheckFailed(#[from] crate::domain::errors::RepositoryError),
}
