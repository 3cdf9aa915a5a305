use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::shared::value_objects::Caller;

pub struct GetPaginatedCartItemsParams {
    pub caller: Caller,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[async_trait]
pub trait GetPaginatedCartItemsUseCase: Send + Sync {
    async fn execute(&self, params: GetPaginatedCartItemsParams)
    -> Result<Vec<CartItem>, CartError>;
}
