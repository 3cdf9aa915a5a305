use std::sync::Arc;

use logger::TracingLogger;
use persistence::authorization::repository::GroupPermissionRepositoryPostgres;
use persistence::cart::repository::CartItemRepositoryPostgres;
use persistence::category::repository::CategoryRepositoryPostgres;
use persistence::product::option_repository::ProductOptionRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::wishlist::repository::WishlistItemRepositoryPostgres;

use business::application::authorization::group_permission::GroupPermissionAuthorizationService;
use business::application::cart::create::CreateCartItemUseCaseImpl;
use business::application::cart::delete::DeleteCartItemUseCaseImpl;
use business::application::cart::get_by_id::GetCartItemByIdUseCaseImpl;
use business::application::cart::get_paginated::GetPaginatedCartItemsUseCaseImpl;
use business::application::cart::get_user_cart::GetUserCartUseCaseImpl;
use business::application::cart::update::UpdateCartItemUseCaseImpl;
use business::application::category::get_all::GetAllCategoriesUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_category::GetProductsByCategoryUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_option_values::GetOptionValuesUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::wishlist::create::CreateWishlistItemUseCaseImpl;
use business::application::wishlist::delete::DeleteWishlistItemUseCaseImpl;
use business::application::wishlist::get_all::GetAllWishlistItemsUseCaseImpl;
use business::application::wishlist::get_by_id::GetWishlistItemByIdUseCaseImpl;
use business::application::wishlist::get_products_by_user::GetWishlistProductsUseCaseImpl;

use crate::api::cart::routes::CartApi;
use crate::api::category::routes::CategoryApi;
use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;
use crate::api::wishlist::routes::WishlistApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub category_api: CategoryApi,
    pub cart_api: CartApi,
    pub wishlist_api: WishlistApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let option_repository = Arc::new(ProductOptionRepositoryPostgres::new(pool.clone()));
        let category_repository = Arc::new(CategoryRepositoryPostgres::new(pool.clone()));
        let cart_repository = Arc::new(CartItemRepositoryPostgres::new(pool.clone()));
        let wishlist_repository = Arc::new(WishlistItemRepositoryPostgres::new(pool.clone()));
        let permission_repository = Arc::new(GroupPermissionRepositoryPostgres::new(pool));

        let authorizer = Arc::new(GroupPermissionAuthorizationService {
            repository: permission_repository,
            logger: logger.clone(),
        });

        // Product use cases
        let get_option_values_use_case = Arc::new(GetOptionValuesUseCaseImpl {
            option_repository: option_repository.clone(),
            logger: logger.clone(),
        });
        let product_api = ProductApi::new(
            Arc::new(CreateProductUseCaseImpl {
                repository: product_repository.clone(),
                category_repository: category_repository.clone(),
                authorizer: authorizer.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllProductsUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetProductByIdUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateProductUseCaseImpl {
                repository: product_repository.clone(),
                category_repository: category_repository.clone(),
                authorizer: authorizer.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteProductUseCaseImpl {
                repository: product_repository.clone(),
                authorizer: authorizer.clone(),
                logger: logger.clone(),
            }),
            get_option_values_use_case.clone(),
        );

        // Category use cases
        let category_api = CategoryApi::new(
            Arc::new(GetAllCategoriesUseCaseImpl {
                repository: category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetProductsByCategoryUseCaseImpl {
                repository: product_repository.clone(),
                category_repository,
                logger: logger.clone(),
            }),
        );

        // Cart use cases
        let cart_api = CartApi::new(
            Arc::new(GetPaginatedCartItemsUseCaseImpl {
                repository: cart_repository.clone(),
                authorizer: authorizer.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetCartItemByIdUseCaseImpl {
                repository: cart_repository.clone(),
                authorizer: authorizer.clone(),
                logger: logger.clone(),
            }),
            Arc::new(CreateCartItemUseCaseImpl {
                repository: cart_repository.clone(),
                option_repository: option_repository.clone(),
                authorizer: authorizer.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateCartItemUseCaseImpl {
                repository: cart_repository.clone(),
                option_repository,
                authorizer: authorizer.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteCartItemUseCaseImpl {
                repository: cart_repository.clone(),
                authorizer,
                logger: logger.clone(),
            }),
            Arc::new(GetUserCartUseCaseImpl {
                repository: cart_repository,
                logger: logger.clone(),
            }),
            get_option_values_use_case,
        );

        // Wishlist use cases
        let wishlist_api = WishlistApi::new(
            Arc::new(GetAllWishlistItemsUseCaseImpl {
                repository: wishlist_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetWishlistProductsUseCaseImpl {
                repository: wishlist_repository.clone(),
                product_repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetWishlistItemByIdUseCaseImpl {
                repository: wishlist_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(CreateWishlistItemUseCaseImpl {
                repository: wishlist_repository.clone(),
                product_repository,
                logger: logger.clone(),
            }),
            Arc::new(DeleteWishlistItemUseCaseImpl {
                repository: wishlist_repository,
                logger,
            }),
        );

        Self {
            health_api: HealthApi::new(),
            product_api,
            category_api,
            cart_api,
            wishlist_api,
        }
    }
}
