use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::WishlistItem;
use crate::domain::wishlist::repository::WishlistItemRepository;
use crate::domain::wishlist::use_cases::get_by_id::{
    GetWishlistItemByIdParams, GetWishlistItemByIdUseCase,
};

pub struct GetWishlistItemByIdUseCaseImpl {
    pub repository: Arc<dyn WishlistItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetWishlistItemByIdUseCase for GetWishlistItemByIdUseCaseImpl {
    async fn execute(
        &self,
        params: GetWishlistItemByIdParams,
    ) -> Result<WishlistItem, WishlistError> {
        self.logger
            .debug(&format!("Fetching wishlist item: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => WishlistError::NotFound,
                other => WishlistError::Repository(other),
            })
    }
}
