use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::option::OptionValue;
use crate::domain::product::repository::ProductOptionRepository;
use crate::domain::product::use_cases::get_option_values::{
    GetOptionValuesParams, GetOptionValuesUseCase,
};

pub struct GetOptionValuesUseCaseImpl {
    pub option_repository: Arc<dyn ProductOptionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOptionValuesUseCase for GetOptionValuesUseCaseImpl {
    async fn execute(
        &self,
        params: GetOptionValuesParams,
    ) -> Result<Vec<OptionValue>, ProductError> {
        self.option_repository
            .get_by_id(params.option_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::OptionNotFound,
                other => ProductError::Repository(other),
            })?;

        let values = self.option_repository.get_values(params.option_id).await?;

        self.logger.debug(&format!(
            "Resolved {} values for option {}",
            values.len(),
            params.option_id
        ));
        Ok(values)
    }
}
