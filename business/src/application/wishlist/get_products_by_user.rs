use std::sync::Arc;

use async_trait::async_trait;

use crate::application::authorization::guard::require_user;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::repository::WishlistItemRepository;
use crate::domain::wishlist::use_cases::get_products_by_user::{
    GetWishlistProductsParams, GetWishlistProductsUseCase,
};

pub struct GetWishlistProductsUseCaseImpl {
    pub repository: Arc<dyn WishlistItemRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetWishlistProductsUseCase for GetWishlistProductsUseCaseImpl {
    async fn execute(
        &self,
        params: GetWishlistProductsParams,
    ) -> Result<Vec<Product>, WishlistError> {
        let user_id = require_user(&params.caller)?;

        let items = self.repository.get_by_user(user_id).await?;

        let mut products = Vec::with_capacity(items.len());
        for item in items {
            match self.product_repository.get_by_id(item.product_id).await {
                Ok(product) => products.push(product),
                Err(RepositoryError::NotFound) => {
                    self.logger.warn(&format!(
                        "Wishlist item {} points to missing product {}",
                        item.id, item.product_id
                    ));
                }
                Err(other) => return Err(other.into()),
            }
        }

        Ok(products)
    }
}
