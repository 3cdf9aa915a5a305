use uuid::Uuid;

use crate::domain::authorization::errors::AccessError;
use crate::domain::authorization::model::Action;
use crate::domain::authorization::services::AuthorizationService;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::repository::CartItemRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

/// Loads a cart item the user may act on: granted `action` on `id`, or owner.
///
/// Neither granted nor owner yields `Forbidden` whether or not the item
/// exists. Only a granted user learns that an id is missing.
pub(crate) async fn load_accessible_item(
    repository: &dyn CartItemRepository,
    authorizer: &dyn AuthorizationService,
    user_id: &UserId,
    action: Action,
    id: Uuid,
) -> Result<CartItem, CartError> {
    let granted = authorizer
        .check_permission(user_id, action, Some(id))
        .await?;

    let item = match repository.get_by_id(id).await {
        Ok(item) => Some(item),
        Err(RepositoryError::NotFound) => None,
        Err(other) => return Err(CartError::Repository(other)),
    };

    match item {
        Some(item) if granted || item.is_owned_by(user_id) => Ok(item),
        None if granted => Err(CartError::NotFound),
        _ => Err(AccessError::Forbidden.into()),
    }
}
