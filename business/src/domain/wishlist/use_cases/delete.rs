use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::wishlist::errors::WishlistError;

pub struct DeleteWishlistItemParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteWishlistItemUseCase: Send + Sync {
    async fn execute(&self, params: DeleteWishlistItemParams) -> Result<(), WishlistError>;
}
