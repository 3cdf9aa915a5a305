/// Failures raised by repository adapters.
/// Messages are code-style identifiers so they can be surfaced as-is.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.database_error")]
    DatabaseError,
    #[error("repository.corrupted_row")]
    CorruptedRow,
}
