use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::WishlistItem;

pub struct GetWishlistItemByIdParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetWishlistItemByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetWishlistItemByIdParams)
    -> Result<WishlistItem, WishlistError>;
}
