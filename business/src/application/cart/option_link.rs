use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::errors::RepositoryError;
use crate::domain::product::repository::ProductOptionRepository;

/// Fails with `InvalidProductOption` when the option id does not resolve.
pub(crate) async fn ensure_option_exists(
    option_repository: &dyn ProductOptionRepository,
    option_id: Uuid,
) -> Result<(), CartError> {
    match option_repository.get_by_id(option_id).await {
        Ok(_) => Ok(()),
        Err(RepositoryError::NotFound) => Err(CartError::InvalidProductOption),
        Err(other) => Err(CartError::Repository(other)),
    }
}
