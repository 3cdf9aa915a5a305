use std::sync::Arc;

use async_trait::async_trait;

use crate::application::authorization::guard::{require_permission, require_user};
use crate::application::product::category_link::ensure_category_exists;
use crate::domain::authorization::model::Action;
use crate::domain::authorization::services::AuthorizationService;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub authorizer: Arc<dyn AuthorizationService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        let user_id = require_user(&params.caller)?;
        require_permission(
            self.authorizer.as_ref(),
            user_id,
            Action::CreateProduct,
            None,
        )
        .await?;

        let product = Product::new(params.props)?;
        self.logger
            .info(&format!("Creating product: {}", product.name));

        if let Some(category_id) = product.category_id {
            ensure_category_exists(self.category_repository.as_ref(), category_id).await?;
        }

        self.repository.save(&product).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
