use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{Action, GroupPermission};

#[async_trait]
pub trait GroupPermissionRepository: Send + Sync {
    /// Grants for `action` held by any group the user belongs to.
    async fn find_by_user_and_action(
        &self,
        user_id: &UserId,
        action: Action,
    ) -> Result<Vec<GroupPermission>, RepositoryError>;
}
