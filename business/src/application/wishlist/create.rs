use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::WishlistItem;
use crate::domain::wishlist::repository::WishlistItemRepository;
use crate::domain::wishlist::use_cases::create::{
    CreateWishlistItemParams, CreateWishlistItemUseCase,
};

pub struct CreateWishlistItemUseCaseImpl {
    pub repository: Arc<dyn WishlistItemRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateWishlistItemUseCase for CreateWishlistItemUseCaseImpl {
    async fn execute(
        &self,
        params: CreateWishlistItemParams,
    ) -> Result<WishlistItem, WishlistError> {
        let user_id = params
            .user_id
            .or_else(|| params.caller.user_id().cloned())
            .ok_or(WishlistError::UserRequired)?;

        self.product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => WishlistError::InvalidProduct,
                other => WishlistError::Repository(other),
            })?;

        if let Some(existing) = self
            .repository
            .find_by_user_and_product(&user_id, params.product_id)
            .await?
        {
            self.logger.debug(&format!(
                "Product {} already in wishlist of {}",
                params.product_id, user_id
            ));
            return Ok(existing);
        }

        let stored = self
            .repository
            .save(&WishlistItem::new(user_id, params.product_id))
            .await?;

        self.logger
            .info(&format!("Wishlist item stored: {}", stored.id));
        Ok(stored)
    }
}
