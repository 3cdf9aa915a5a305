use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;

#[async_trait]
pub trait GetAllCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Category>, CategoryError>;
}
