use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::validator::CartPayload;
use crate::domain::shared::value_objects::Caller;

pub struct CreateCartItemParams {
    pub caller: Caller,
    pub payload: CartPayload,
}

#[async_trait]
pub trait CreateCartItemUseCase: Send + Sync {
    async fn execute(&self, params: CreateCartItemParams) -> Result<CartItem, CartError>;
}
