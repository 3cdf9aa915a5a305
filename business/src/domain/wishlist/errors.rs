use crate::domain::authorization::errors::AccessError;
use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum WishlistError {
    #[error("wishlist.not_found")]
    NotFound,
    #[error("wishlist.user_required")]
    UserRequired,
    #[error("wishlist.malformed_product_id")]
    MalformedProductId,
    #[error("wishlist.invalid_product")]
    InvalidProduct,
    #[error(transparent)]
    Access(#[from] AccessError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
