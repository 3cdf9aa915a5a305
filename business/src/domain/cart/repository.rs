use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::pagination::Pagination;
use crate::domain::shared::value_objects::UserId;

use super::model::CartItem;

#[async_trait]
pub trait CartItemRepository: Send + Sync {
    async fn get_page(&self, pagination: Pagination) -> Result<Vec<CartItem>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<CartItem, RepositoryError>;
    async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<CartItem>, RepositoryError>;
    async fn save(&self, item: &CartItem) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
