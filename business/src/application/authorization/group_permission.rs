use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::authorization::errors::AccessError;
use crate::domain::authorization::model::Action;
use crate::domain::authorization::repository::GroupPermissionRepository;
use crate::domain::authorization::services::AuthorizationService;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserId;

/// Oracle backed by the group permission table.
pub struct GroupPermissionAuthorizationService {
    pub repository: Arc<dyn GroupPermissionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AuthorizationService for GroupPermissionAuthorizationService {
    async fn check_permission(
        &self,
        user_id: &UserId,
        action: Action,
        resource_id: Option<Uuid>,
    ) -> Result<bool, AccessError> {
        let grants = self
            .repository
            .find_by_user_and_action(user_id, action)
            .await?;

        let allowed = grants
            .iter()
            .any(|grant| grant.covers(action, resource_id));

        self.logger.debug(&format!(
            "Permission check {} for user {} on {:?}: {}",
            action, user_id, resource_id, allowed
        ));
        Ok(allowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockGroupPermissionRepo, buyer, mock_logger};
    use crate::domain::authorization::model::GroupPermission;
    use crate::domain::errors::RepositoryError;

    fn grant(resource_id: Option<Uuid>) -> GroupPermission {
        GroupPermission {
            id: Uuid::new_v4(),
            group_id: Uuid::new_v4(),
            action: Action::ViewCarts,
            resource_id,
        }
    }

    fn service_with(grants: Vec<GroupPermission>) -> GroupPermissionAuthorizationService {
        let mut repo = MockGroupPermissionRepo::new();
        repo.expect_find_by_user_and_action()
            .returning(move |_, _| Ok(grants.clone()));
        GroupPermissionAuthorizationService {
            repository: Arc::new(repo),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_allow_when_user_holds_global_grant() {
        let service = service_with(vec![grant(None)]);

        let allowed = service
            .check_permission(&buyer(), Action::ViewCarts, Some(Uuid::new_v4()))
            .await
            .unwrap();

        assert!(allowed);
    }

    #[tokio::test]
    async fn should_allow_scoped_grant_only_for_its_resource() {
        let cart_id = Uuid::new_v4();
        let service = service_with(vec![grant(Some(cart_id))]);

        assert!(
            service
                .check_permission(&buyer(), Action::ViewCarts, Some(cart_id))
                .await
                .unwrap()
        );
        assert!(
            !service
                .check_permission(&buyer(), Action::ViewCarts, None)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn should_deny_when_user_has_no_grant() {
        let service = service_with(vec![]);

        let allowed = service
            .check_permission(&buyer(), Action::ViewCarts, None)
            .await
            .unwrap();

        assert!(!allowed);
    }

    #[tokio::test]
    async fn should_fail_when_grant_lookup_fails() {
        let mut repo = MockGroupPermissionRepo::new();
        repo.expect_find_by_user_and_action()
            .returning(|_, _| Err(RepositoryError::DatabaseError));
        let service = GroupPermissionAuthorizationService {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = service
            .check_permission(&buyer(), Action::ViewCarts, None)
            .await;

        assert!(matches!(result, Err(AccessError::CheckFailed(_))));
    }
}
