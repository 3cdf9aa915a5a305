use std::sync::Arc;

use async_trait::async_trait;

use crate::application::authorization::guard::require_user;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::repository::CartItemRepository;
use crate::domain::cart::use_cases::get_user_cart::{GetUserCartParams, GetUserCartUseCase};
use crate::domain::logger::Logger;

pub struct GetUserCartUseCaseImpl {
    pub repository: Arc<dyn CartItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetUserCartUseCase for GetUserCartUseCaseImpl {
    async fn execute(&self, params: GetUserCartParams) -> Result<Vec<CartItem>, CartError> {
        let user_id = require_user(&params.caller)?;

        let items = self.repository.get_by_user(user_id).await?;

        self.logger.info(&format!(
            "Found {} cart items for user {}",
            items.len(),
            user_id
        ));
        Ok(items)
    }
}
