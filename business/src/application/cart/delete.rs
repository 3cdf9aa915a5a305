use std::sync::Arc;

use async_trait::async_trait;

use super::access::load_accessible_item;
use crate::application::authorization::guard::require_user;
use crate::domain::authorization::model::Action;
use crate::domain::authorization::services::AuthorizationService;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartItemRepository;
use crate::domain::cart::use_cases::delete::{DeleteCartItemParams, DeleteCartItemUseCase};
use crate::domain::logger::Logger;

pub struct DeleteCartItemUseCaseImpl {
    pub repository: Arc<dyn CartItemRepository>,
    pub authorizer: Arc<dyn AuthorizationService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCartItemUseCase for DeleteCartItemUseCaseImpl {
    async fn execute(&self, params: DeleteCartItemParams) -> Result<(), CartError> {
        let user_id = require_user(&params.caller)?;

        let item = load_accessible_item(
            self.repository.as_ref(),
            self.authorizer.as_ref(),
            user_id,
            Action::DeleteCart,
            params.id,
        )
        .await?;

        self.repository.delete(item.id).await?;

        self.logger
            .info(&format!("Cart item deleted: {}", item.id));
        Ok(())
    }
}
