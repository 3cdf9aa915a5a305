use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::shared::value_objects::Caller;

pub struct GetCartItemByIdParams {
    pub caller: Caller,
    pub id: Uuid,
}

#[async_trait]
pub trait GetCartItemByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetCartItemByIdParams) -> Result<CartItem, CartError>;
}
