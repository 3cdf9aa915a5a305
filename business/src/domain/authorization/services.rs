use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;

use super::errors::AccessError;
use super::model::Action;

/// Permission oracle: may `user_id` perform `action`, optionally on one resource?
///
/// Implementations are swappable; callers only see allow/deny.
#[async_trait]
pub trait AuthorizationService: Send + Sync {
    async fn check_permission(
        &self,
        user_id: &UserId,
        action: Action,
        resource_id: Option<Uuid>,
    ) -> Result<bool, AccessError>;
}
