use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::shared::value_objects::Caller;

pub struct GetUserCartParams {
    pub caller: Caller,
}

#[async_trait]
pub trait GetUserCartUseCase: Send + Sync {
    async fn execute(&self, params: GetUserCartParams) -> Result<Vec<CartItem>, CartError>;
}
