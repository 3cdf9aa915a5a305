use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::shared::value_objects::UserId;
use business::domain::wishlist::errors::WishlistError;
use business::domain::wishlist::model::WishlistItem;

#[derive(Debug, Clone, Object)]
pub struct CreateWishlistRequest {
    /// Owner of the entry; defaults to the authenticated caller
    pub user_id: Option<String>,
    pub product_id: String,
}

impl CreateWishlistRequest {
    pub fn owner(&self) -> Option<UserId> {
        self.user_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(UserId::new)
    }

    pub fn product_id(&self) -> Result<Uuid, WishlistError> {
        Uuid::parse_str(self.product_id.trim()).map_err(|_| WishlistError::MalformedProductId)
    }
}

#[derive(Debug, Clone, Object)]
pub struct WishlistItemResponse {
    pub id: String,
    pub user_id: String,
    pub product_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<WishlistItem> for WishlistItemResponse {
    fn from(item: WishlistItem) -> Self {
        Self {
            id: item.id.to_string(),
            user_id: item.user_id.to_string(),
            product_id: item.product_id.to_string(),
            created_at: item.created_at,
        }
    }
}
