use std::sync::Arc;

use async_trait::async_trait;

use super::access::load_accessible_item;
use crate::application::authorization::guard::require_user;
use crate::domain::authorization::model::Action;
use crate::domain::authorization::services::AuthorizationService;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::repository::CartItemRepository;
use crate::domain::cart::use_cases::get_by_id::{GetCartItemByIdParams, GetCartItemByIdUseCase};
use crate::domain::logger::Logger;

pub struct GetCartItemByIdUseCaseImpl {
    pub repository: Arc<dyn CartItemRepository>,
    pub authorizer: Arc<dyn AuthorizationService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartItemByIdUseCase for GetCartItemByIdUseCaseImpl {
    async fn execute(&self, params: GetCartItemByIdParams) -> Result<CartItem, CartError> {
        let user_id = require_user(&params.caller)?;

        let item = load_accessible_item(
            self.repository.as_ref(),
            self.authorizer.as_ref(),
            user_id,
            Action::ViewCarts,
            params.id,
        )
        .await?;

        self.logger
            .debug(&format!("Cart item {} read by {}", item.id, user_id));
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        MockCartItemRepo, as_buyer, authorizer, buyer, mock_logger, unused_authorizer,
    };
    use crate::domain::authorization::errors::AccessError;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::{Caller, UserId};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_return_own_item() {
        let item = CartItem::new(buyer(), Uuid::new_v4(), 2).unwrap();
        let expected = item.clone();
        let mut repo = MockCartItemRepo::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(item.clone()));

        let use_case = GetCartItemByIdUseCaseImpl {
            repository: Arc::new(repo),
            authorizer: authorizer(false),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetCartItemByIdParams {
                caller: as_buyer(),
                id: expected.id,
            })
            .await;

        assert_eq!(result.unwrap(), expected);
    }

    #[tokio::test]
    async fn should_forbid_unprivileged_caller_on_missing_item() {
        let mut repo = MockCartItemRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetCartItemByIdUseCaseImpl {
            repository: Arc::new(repo),
            authorizer: authorizer(false),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetCartItemByIdParams {
                caller: as_buyer(),
                id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::Access(AccessError::Forbidden)
        ));
    }

    #[tokio::test]
    async fn should_not_leak_foreign_item() {
        let foreign = CartItem::new(UserId::new("other-buyer"), Uuid::new_v4(), 1).unwrap();
        let id = foreign.id;
        let mut repo = MockCartItemRepo::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(foreign.clone()));

        let use_case = GetCartItemByIdUseCaseImpl {
            repository: Arc::new(repo),
            authorizer: authorizer(false),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetCartItemByIdParams {
                caller: as_buyer(),
                id,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::Access(AccessError::Forbidden)
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_to_granted_caller() {
        let mut repo = MockCartItemRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetCartItemByIdUseCaseImpl {
            repository: Arc::new(repo),
            authorizer: authorizer(true),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetCartItemByIdParams {
                caller: as_buyer(),
                id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_anonymous_caller() {
        let mut repo = MockCartItemRepo::new();
        repo.expect_get_by_id().never();

        let use_case = GetCartItemByIdUseCaseImpl {
            repository: Arc::new(repo),
            authorizer: unused_authorizer(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetCartItemByIdParams {
                caller: Caller::Anonymous,
                id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::Access(AccessError::Unauthenticated)
        ));
    }
}
