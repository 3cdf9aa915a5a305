use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::repository::WishlistItemRepository;
use crate::domain::wishlist::use_cases::delete::{
    DeleteWishlistItemParams, DeleteWishlistItemUseCase,
};

pub struct DeleteWishlistItemUseCaseImpl {
    pub repository: Arc<dyn WishlistItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteWishlistItemUseCase for DeleteWishlistItemUseCaseImpl {
    async fn execute(&self, params: DeleteWishlistItemParams) -> Result<(), WishlistError> {
        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => WishlistError::NotFound,
                other => WishlistError::Repository(other),
            })?;

        self.repository.delete(params.id).await?;

        self.logger
            .info(&format!("Wishlist item deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockWishlistItemRepo, buyer, mock_logger};
    use crate::domain::wishlist::model::WishlistItem;
    use uuid::Uuid;

    #[tokio::test]
    async fn should_delete_without_identity() {
        let item = WishlistItem::new(buyer(), Uuid::new_v4());
        let id = item.id;
        let mut repo = MockWishlistItemRepo::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(item.clone()));
        repo.expect_delete().times(1).returning(|_| Ok(()));

        let use_case = DeleteWishlistItemUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteWishlistItemParams { id }).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_item() {
        let mut repo = MockWishlistItemRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        repo.expect_delete().never();

        let use_case = DeleteWishlistItemUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteWishlistItemParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result.unwrap_err(), WishlistError::NotFound));
    }
}
