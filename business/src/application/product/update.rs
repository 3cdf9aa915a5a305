use std::sync::Arc;

use async_trait::async_trait;

use crate::application::authorization::guard::{require_permission, require_user};
use crate::application::product::category_link::ensure_category_exists;
use crate::domain::authorization::model::Action;
use crate::domain::authorization::services::AuthorizationService;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::shared::field_update::FieldUpdate;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub authorizer: Arc<dyn AuthorizationService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        let user_id = require_user(&params.caller)?;
        require_permission(
            self.authorizer.as_ref(),
            user_id,
            Action::UpdateProduct,
            Some(params.id),
        )
        .await?;

        self.logger
            .info(&format!("Updating product: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        if let FieldUpdate::Set(category_id) = params.patch.category_update()? {
            ensure_category_exists(self.category_repository.as_ref(), category_id).await?;
        }

        let updated = existing.patched(params.patch)?;
        self.repository.save(&updated).await?;

        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}
