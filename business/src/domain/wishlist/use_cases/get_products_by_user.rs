use async_trait::async_trait;

use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::Caller;
use crate::domain::wishlist::errors::WishlistError;

pub struct GetWishlistProductsParams {
    pub caller: Caller,
}

#[async_trait]
pub trait GetWishlistProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetWishlistProductsParams)
    -> Result<Vec<Product>, WishlistError>;
}
