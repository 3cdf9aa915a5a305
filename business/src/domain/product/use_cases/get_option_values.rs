use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::option::OptionValue;

pub struct GetOptionValuesParams {
    pub option_id: Uuid,
}

#[async_trait]
pub trait GetOptionValuesUseCase: Send + Sync {
    async fn execute(&self, params: GetOptionValuesParams)
    -> Result<Vec<OptionValue>, ProductError>;
}
