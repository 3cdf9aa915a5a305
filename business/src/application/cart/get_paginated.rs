use std::sync::Arc;

use async_trait::async_trait;

use crate::application::authorization::guard::{require_permission, require_user};
use crate::domain::authorization::model::Action;
use crate::domain::authorization::services::AuthorizationService;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::repository::CartItemRepository;
use crate::domain::cart::use_cases::get_paginated::{
    GetPaginatedCartItemsParams, GetPaginatedCartItemsUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::shared::pagination::Pagination;

pub struct GetPaginatedCartItemsUseCaseImpl {
    pub repository: Arc<dyn CartItemRepository>,
    pub authorizer: Arc<dyn AuthorizationService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetPaginatedCartItemsUseCase for GetPaginatedCartItemsUseCaseImpl {
    async fn execute(
        &self,
        params: GetPaginatedCartItemsParams,
    ) -> Result<Vec<CartItem>, CartError> {
        let pagination = Pagination::from_query(params.page, params.limit)?;

        let user_id = require_user(&params.caller)?;
        require_permission(self.authorizer.as_ref(), user_id, Action::ViewCarts, None).await?;

        let items = self.repository.get_page(pagination).await?;

        self.logger.info(&format!(
            "Listed {} cart items (page {}, limit {})",
            items.len(),
            pagination.page(),
            pagination.limit()
        ));
        Ok(items)
    }
}
