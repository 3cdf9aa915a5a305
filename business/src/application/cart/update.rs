use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::access::load_accessible_item;
use crate::application::authorization::guard::require_user;
use crate::application::cart::option_link::ensure_option_exists;
use crate::domain::authorization::model::Action;
use crate::domain::authorization::services::AuthorizationService;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::repository::CartItemRepository;
use crate::domain::cart::use_cases::update::{UpdateCartItemParams, UpdateCartItemUseCase};
use crate::domain::cart::validator::{CartValidationMode, validate_cart_data};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductOptionRepository;

pub struct UpdateCartItemUseCaseImpl {
    pub repository: Arc<dyn CartItemRepository>,
    pub option_repository: Arc<dyn ProductOptionRepository>,
    pub authorizer: Arc<dyn AuthorizationService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartItemUseCase for UpdateCartItemUseCaseImpl {
    async fn execute(&self, params: UpdateCartItemParams) -> Result<CartItem, CartError> {
        let user_id = require_user(&params.caller)?;
        let validated = validate_cart_data(params.payload, CartValidationMode::Update)?;

        let mut item = load_accessible_item(
            self.repository.as_ref(),
            self.authorizer.as_ref(),
            user_id,
            Action::UpdateCart,
            params.id,
        )
        .await?;

        if let Some(option_id) = validated.product_option_id {
            ensure_option_exists(self.option_repository.as_ref(), option_id).await?;
            item.product_option_id = option_id;
        }
        if let Some(quantity) = validated.quantity {
            item.quantity = quantity;
        }
        item.updated_at = Utc::now();

        self.repository.save(&item).await?;

        self.logger
            .info(&format!("Cart item updated: {}", item.id));
        Ok(item)
    }
}
