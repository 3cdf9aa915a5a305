use uuid::Uuid;

use crate::domain::authorization::errors::AccessError;
use crate::domain::authorization::model::Action;
use crate::domain::authorization::services::AuthorizationService;
use crate::domain::shared::value_objects::{Caller, UserId};

/// Returns the caller's identity or `Unauthenticated`.
pub fn require_user(caller: &Caller) -> Result<&UserId, AccessError> {
    caller.user_id().ok_or(AccessError::Unauthenticated)
}

/// Asks the oracle and turns a denial into `Forbidden`.
pub async fn require_permission(
    authorizer: &dyn AuthorizationService,
    user_id: &UserId,
    action: Action,
    resource_id: Option<Uuid>,
) -> Result<(), AccessError> {
    if authorizer
        .check_permission(user_id, action, resource_id)
        .await?
    {
        Ok(())
    } else {
        Err(AccessError::Forbidden)
    }
}
