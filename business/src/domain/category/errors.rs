#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("category.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
