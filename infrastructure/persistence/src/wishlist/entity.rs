use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::shared::value_objects::UserId;
use business::domain::wishlist::model::WishlistItem;

#[derive(Debug, FromRow)]
pub struct WishlistItemEntity {
    pub id: Uuid,
    pub user_id: String,
    pub product_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl WishlistItemEntity {
    pub fn into_domain(self) -> WishlistItem {
        WishlistItem::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.product_id,
            self.created_at,
        )
    }
}
