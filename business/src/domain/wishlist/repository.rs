use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::WishlistItem;

#[async_trait]
pub trait WishlistItemRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<WishlistItem>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<WishlistItem, RepositoryError>;
    async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<WishlistItem>, RepositoryError>;
    async fn find_by_user_and_product(
        &self,
        user_id: &UserId,
        product_id: Uuid,
    ) -> Result<Option<WishlistItem>, RepositoryError>;
    /// Inserts the item unless its `(user_id, product_id)` pair is already
    /// stored, and returns the row that ends up stored for that pair.
    async fn save(&self, item: &WishlistItem) -> Result<WishlistItem, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
