use async_trait::async_trait;

use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::WishlistItem;

#[async_trait]
pub trait GetAllWishlistItemsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<WishlistItem>, WishlistError>;
}
