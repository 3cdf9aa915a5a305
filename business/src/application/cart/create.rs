use std::sync::Arc;

use async_trait::async_trait;

use crate::application::authorization::guard::{require_permission, require_user};
use crate::application::cart::option_link::ensure_option_exists;
use crate::domain::authorization::model::Action;
use crate::domain::authorization::services::AuthorizationService;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::repository::CartItemRepository;
use crate::domain::cart::use_cases::create::{CreateCartItemParams, CreateCartItemUseCase};
use crate::domain::cart::validator::{
    CartValidationError, CartValidationMode, validate_cart_data,
};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductOptionRepository;

pub struct CreateCartItemUseCaseImpl {
    pub repository: Arc<dyn CartItemRepository>,
    pub option_repository: Arc<dyn ProductOptionRepository>,
    pub authorizer: Arc<dyn AuthorizationService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCartItemUseCase for CreateCartItemUseCaseImpl {
    async fn execute(&self, params: CreateCartItemParams) -> Result<CartItem, CartError> {
        let user_id = require_user(&params.caller)?;
        require_permission(self.authorizer.as_ref(), user_id, Action::CreateCart, None).await?;

        let validated = validate_cart_data(params.payload, CartValidationMode::Create)?;
        let product_option_id = validated
            .product_option_id
            .ok_or(CartValidationError::ProductOptionRequired)?;
        let quantity = validated
            .quantity
            .ok_or(CartValidationError::QuantityRequired)?;

        ensure_option_exists(self.option_repository.as_ref(), product_option_id).await?;

        let item = CartItem::new(user_id.clone(), product_option_id, quantity)?;
        self.repository.save(&item).await?;

        self.logger.info(&format!(
            "Cart item {} created for user {}",
            item.id, user_id
        ));
        Ok(item)
    }
}
