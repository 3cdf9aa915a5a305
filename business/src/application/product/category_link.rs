use uuid::Uuid;

use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::product::errors::ProductError;

/// Fails with `InvalidCategory` unless `category_id` names a stored category.
pub(crate) async fn ensure_category_exists(
    repository: &dyn CategoryRepository,
    category_id: Uuid,
) -> Result<(), ProductError> {
    match repository.get_by_id(category_id).await {
        Ok(_) => Ok(()),
        Err(RepositoryError::NotFound) => Err(ProductError::InvalidCategory),
        Err(other) => Err(ProductError::Repository(other)),
    }
}
