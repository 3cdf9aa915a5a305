use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::authorization::model::{Action, GroupPermission};
use business::domain::authorization::repository::GroupPermissionRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::GroupPermissionEntity;
use crate::db::query_failed;

pub struct GroupPermissionRepositoryPostgres {
    pool: PgPool,
}

impl GroupPermissionRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupPermissionRepository for GroupPermissionRepositoryPostgres {
    async fn find_by_user_and_action(
        &self,
        user_id: &UserId,
        action: Action,
    ) -> Result<Vec<GroupPermission>, RepositoryError> {
        let entities = sqlx::query_as::<_, GroupPermissionEntity>(
            r#"SELECT gp.id, gp.group_id, gp.action, gp.resource_id
            FROM group_permissions gp
            JOIN user_groups ug ON ug.group_id = gp.group_id
            WHERE ug.user_id = $1 AND gp.action = $2"#,
        )
        .bind(user_id.as_str())
        .bind(action.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }
}
