use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::get_all::GetAllCategoriesUseCase;
use crate::domain::logger::Logger;

pub struct GetAllCategoriesUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllCategoriesUseCase for GetAllCategoriesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Category>, CategoryError> {
        let categories = self.repository.get_all().await?;

        self.logger
            .info(&format!("Found {} categories", categories.len()));
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockCategoryRepo, mock_logger};
    use chrono::Utc;
    use uuid::Uuid;

    #[tokio::test]
    async fn should_return_all_categories() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_get_all().returning(|| {
            Ok(vec![
                Category::from_repository(Uuid::new_v4(), "Books".to_string(), Utc::now()),
                Category::from_repository(Uuid::new_v4(), "Garden".to_string(), Utc::now()),
            ])
        });

        let use_case = GetAllCategoriesUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let categories = use_case.execute().await.unwrap();

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Books");
    }
}
