use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::option::{OptionValue, ProductOption};
use business::domain::product::repository::ProductOptionRepository;

use super::entity::{OptionValueEntity, ProductOptionEntity};
use crate::db::query_failed;

pub struct ProductOptionRepositoryPostgres {
    pool: PgPool,
}

impl ProductOptionRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductOptionRepository for ProductOptionRepositoryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<ProductOption, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductOptionEntity>(
            "SELECT id, product_id, sku, created_at FROM product_options WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_values(&self, option_id: Uuid) -> Result<Vec<OptionValue>, RepositoryError> {
        let entities = sqlx::query_as::<_, OptionValueEntity>(
            "SELECT name, value FROM product_option_values WHERE option_id = $1 ORDER BY position, name",
        )
        .bind(option_id)
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
