use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::WishlistItem;
use crate::domain::wishlist::repository::WishlistItemRepository;
use crate::domain::wishlist::use_cases::get_all::GetAllWishlistItemsUseCase;

pub struct GetAllWishlistItemsUseCaseImpl {
    pub repository: Arc<dyn WishlistItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllWishlistItemsUseCase for GetAllWishlistItemsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<WishlistItem>, WishlistError> {
        let items = self.repository.get_all().await?;

        self.logger
            .info(&format!("Found {} wishlist items", items.len()));
        Ok(items)
    }
}
