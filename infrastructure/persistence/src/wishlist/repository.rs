use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::wishlist::model::WishlistItem;
use business::domain::wishlist::repository::WishlistItemRepository;

use super::entity::WishlistItemEntity;
use crate::db::query_failed;

pub struct WishlistItemRepositoryPostgres {
    pool: PgPool,
}

impl WishlistItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WishlistItemRepository for WishlistItemRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<WishlistItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, WishlistItemEntity>(
            "SELECT id, user_id, product_id, created_at FROM wishlist_items ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<WishlistItem, RepositoryError> {
        let entity = sqlx::query_as::<_, WishlistItemEntity>(
            "SELECT id, user_id, product_id, created_at FROM wishlist_items WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<WishlistItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, WishlistItemEntity>(
            "SELECT id, user_id, product_id, created_at FROM wishlist_items WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_by_user_and_product(
        &self,
        user_id: &UserId,
        product_id: Uuid,
    ) -> Result<Option<WishlistItem>, RepositoryError> {
        let entity = sqlx::query_as::<_, WishlistItemEntity>(
            "SELECT id, user_id, product_id, created_at FROM wishlist_items WHERE user_id = $1 AND product_id = $2",
        )
        .bind(user_id.as_str())
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, item: &WishlistItem) -> Result<WishlistItem, RepositoryError> {
        // The no-op update makes RETURNING yield the existing row on conflict.
        let entity = sqlx::query_as::<_, WishlistItemEntity>(
            r#"INSERT INTO wishlist_items (id, user_id, product_id, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, product_id) DO UPDATE SET user_id = EXCLUDED.user_id
            RETURNING id, user_id, product_id, created_at"#,
        )
        .bind(item.id)
        .bind(item.user_id.as_str())
        .bind(item.product_id)
        .bind(item.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(entity.into_domain())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM wishlist_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(())
    }
}
