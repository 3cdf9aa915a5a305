use crate::domain::authorization::errors::AccessError;
use crate::domain::errors::RepositoryError;
use crate::domain::shared::pagination::PaginationError;

use super::validator::CartValidationError;

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.not_found")]
    NotFound,
    #[error("cart.invalid_product_option")]
    InvalidProductOption,
    #[error(transparent)]
    Validation(#[from] CartValidationError),
    #[error(transparent)]
    Pagination(#[from] PaginationError),
    #[error(transparent)]
    Access(#[from] AccessError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
