use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;
use super::option::{OptionValue, ProductOption};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn get_by_category_id(&self, category_id: Uuid) -> Result<Vec<Product>, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait ProductOptionRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<ProductOption, RepositoryError>;
    async fn get_values(&self, option_id: Uuid) -> Result<Vec<OptionValue>, RepositoryError>;
}
