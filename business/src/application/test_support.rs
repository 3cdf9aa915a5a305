//! Mocks of every port, shared by the use case tests.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::domain::authorization::errors::AccessError;
use crate::domain::authorization::model::{Action, GroupPermission};
use crate::domain::authorization::repository::GroupPermissionRepository;
use crate::domain::authorization::services::AuthorizationService;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::repository::CartItemRepository;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::option::{OptionValue, ProductOption};
use crate::domain::product::repository::{ProductOptionRepository, ProductRepository};
use crate::domain::shared::pagination::Pagination;
use crate::domain::shared::value_objects::{Caller, UserId};
use crate::domain::wishlist::model::WishlistItem;
use crate::domain::wishlist::repository::WishlistItemRepository;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
        async fn get_by_category_id(&self, category_id: Uuid) -> Result<Vec<Product>, RepositoryError>;
        async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub ProductOptionRepo {}

    #[async_trait]
    impl ProductOptionRepository for ProductOptionRepo {
        async fn get_by_id(&self, id: Uuid) -> Result<ProductOption, RepositoryError>;
        async fn get_values(&self, option_id: Uuid) -> Result<Vec<OptionValue>, RepositoryError>;
    }
}

mock! {
    pub CategoryRepo {}

    #[async_trait]
    impl CategoryRepository for CategoryRepo {
        async fn get_all(&self) -> Result<Vec<Category>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Category, RepositoryError>;
    }
}

mock! {
    pub CartItemRepo {}

    #[async_trait]
    impl CartItemRepository for CartItemRepo {
        async fn get_page(&self, pagination: Pagination) -> Result<Vec<CartItem>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<CartItem, RepositoryError>;
        async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<CartItem>, RepositoryError>;
        async fn save(&self, item: &CartItem) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub WishlistItemRepo {}

    #[async_trait]
    impl WishlistItemRepository for WishlistItemRepo {
        async fn get_all(&self) -> Result<Vec<WishlistItem>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<WishlistItem, RepositoryError>;
        async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<WishlistItem>, RepositoryError>;
        async fn find_by_user_and_product(&self, user_id: &UserId, product_id: Uuid) -> Result<Option<WishlistItem>, RepositoryError>;
        async fn save(&self, item: &WishlistItem) -> Result<WishlistItem, RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub GroupPermissionRepo {}

    #[async_trait]
    impl GroupPermissionRepository for GroupPermissionRepo {
        async fn find_by_user_and_action(&self, user_id: &UserId, action: Action) -> Result<Vec<GroupPermission>, RepositoryError>;
    }
}

mock! {
    pub Authorizer {}

    #[async_trait]
    impl AuthorizationService for Authorizer {
        async fn check_permission(&self, user_id: &UserId, action: Action, resource_id: Option<Uuid>) -> Result<bool, AccessError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// Oracle that answers every question with `allowed`.
pub fn authorizer(allowed: bool) -> Arc<dyn AuthorizationService> {
    let mut authorizer = MockAuthorizer::new();
    authorizer
        .expect_check_permission()
        .returning(move |_, _, _| Ok(allowed));
    Arc::new(authorizer)
}

/// Oracle that must never be consulted.
pub fn unused_authorizer() -> Arc<dyn AuthorizationService> {
    let mut authorizer = MockAuthorizer::new();
    authorizer.expect_check_permission().never();
    Arc::new(authorizer)
}

pub fn buyer() -> UserId {
    UserId::new("buyer-1")
}

pub fn as_buyer() -> Caller {
    Caller::Authenticated(buyer())
}
