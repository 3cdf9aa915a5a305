use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::validator::CartPayload;
use crate::domain::shared::value_objects::Caller;

pub struct UpdateCartItemParams {
    pub caller: Caller,
    pub id: Uuid,
    pub payload: CartPayload,
}

#[async_trait]
pub trait UpdateCartItemUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCartItemParams) -> Result<CartItem, CartError>;
}
