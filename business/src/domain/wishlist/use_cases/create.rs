use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::{Caller, UserId};
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::WishlistItem;

pub struct CreateWishlistItemParams {
    pub caller: Caller,
    /// Owner named in the body; falls back to the caller when absent.
    pub user_id: Option<UserId>,
    pub product_id: Uuid,
}

#[async_trait]
pub trait CreateWishlistItemUseCase: Send + Sync {
    async fn execute(&self, params: CreateWishlistItemParams)
    -> Result<WishlistItem, WishlistError>;
}
