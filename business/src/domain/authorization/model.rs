use uuid::Uuid;

/// Actions that can be granted to a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ViewCarts,
    CreateCart,
    UpdateCart,
    DeleteCart,
    CreateProduct,
    UpdateProduct,
    DeleteProduct,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::ViewCarts => "view_carts",
            Action::CreateCart => "create_cart",
            Action::UpdateCart => "update_cart",
            Action::DeleteCart => "delete_cart",
            Action::CreateProduct => "create_product",
            Action::UpdateProduct => "update_product",
            Action::DeleteProduct => "delete_product",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view_carts" => Ok(Action::ViewCarts),
            "create_cart" => Ok(Action::CreateCart),
            "update_cart" => Ok(Action::UpdateCart),
            "delete_cart" => Ok(Action::DeleteCart),
            "create_product" => Ok(Action::CreateProduct),
            "update_product" => Ok(Action::UpdateProduct),
            "delete_product" => Ok(Action::DeleteProduct),
            _ => Err(format!("Invalid action: {}", s)),
        }
    }
}

/// A stored grant allowing members of a group to perform an action.
///
/// `resource_id == None` is a global grant; otherwise the grant only covers
/// that one resource.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupPermission {
    pub id: Uuid,
    pub group_id: Uuid,
    pub action: Action,
    pub resource_id: Option<Uuid>,
}

impl GroupPermission {
    pub fn covers(&self, action: Action, resource_id: Option<Uuid>) -> bool {
        if self.action != action {
            return false;
        }
        match self.resource_id {
            None => true,
            Some(scoped) => resource_id == Some(scoped),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grant(action: Action, resource_id: Option<Uuid>) -> GroupPermission {
        GroupPermission {
            id: Uuid::new_v4(),
            group_id: Uuid::new_v4(),
            action,
            resource_id,
        }
    }

    #[test]
    fn should_round_trip_action_names() {
        for action in [
            Action::ViewCarts,
            Action::CreateCart,
            Action::UpdateCart,
            Action::DeleteCart,
            Action::CreateProduct,
            Action::UpdateProduct,
            Action::DeleteProduct,
        ] {
            assert_eq!(action.as_str().parse::<Action>(), Ok(action));
        }
    }

    #[test]
    fn should_reject_unknown_action_name() {
        assert!("drop_tables".parse::<Action>().is_err());
    }

    #[test]
    fn should_cover_any_resource_when_grant_is_global() {
        let permission = grant(Action::ViewCarts, None);

        assert!(permission.covers(Action::ViewCarts, None));
        assert!(permission.covers(Action::ViewCarts, Some(Uuid::new_v4())));
    }

    #[test]
    fn should_cover_only_its_resource_when_grant_is_scoped() {
        let cart_id = Uuid::new_v4();
        let permission = grant(Action::ViewCarts, Some(cart_id));

        assert!(permission.covers(Action::ViewCarts, Some(cart_id)));
        assert!(!permission.covers(Action::ViewCarts, Some(Uuid::new_v4())));
        assert!(!permission.covers(Action::ViewCarts, None));
    }

    #[test]
    fn should_not_cover_other_actions() {
        let permission = grant(Action::ViewCarts, None);

        assert!(!permission.covers(Action::CreateCart, None));
    }
}
