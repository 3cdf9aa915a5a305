use sqlx::FromRow;
use uuid::Uuid;

use business::domain::authorization::model::{Action, GroupPermission};
use business::domain::errors::RepositoryError;

#[derive(Debug, FromRow)]
pub struct GroupPermissionEntity {
    pub id: Uuid,
    pub group_id: Uuid,
    pub action: String,
    pub resource_id: Option<Uuid>,
}

impl GroupPermissionEntity {
    pub fn into_domain(self) -> Result<GroupPermission, RepositoryError> {
        let action = self
            .action
            .parse::<Action>()
            .map_err(|_| RepositoryError::CorruptedRow)?;

        Ok(GroupPermission {
            id: self.id,
            group_id: self.group_id,
            action,
            resource_id: self.resource_id,
        })
    }
}
