use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::cart::model::CartItem;
use business::domain::cart::validator::CartPayload;
use business::domain::product::option::OptionValue;

use crate::api::product::dto::OptionValueResponse;

#[derive(Debug, Clone, Object)]
pub struct CreateCartRequest {
    /// Purchasable option of a product (required)
    pub product_option_id: Option<String>,
    /// Number of units, at least 1 (required)
    pub quantity: Option<i32>,
}

impl From<CreateCartRequest> for CartPayload {
    fn from(request: CreateCartRequest) -> Self {
        CartPayload {
            product_option_id: request.product_option_id,
            quantity: request.quantity,
        }
    }
}

/// Partial update; at least one field must be present.
#[derive(Debug, Clone, Object)]
pub struct UpdateCartRequest {
    pub product_option_id: Option<String>,
    pub quantity: Option<i32>,
}

impl From<UpdateCartRequest> for CartPayload {
    fn from(request: UpdateCartRequest) -> Self {
        CartPayload {
            product_option_id: request.product_option_id,
            quantity: request.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    pub id: String,
    pub user_id: String,
    pub product_option_id: String,
    pub quantity: i32,
    /// Display values of the selected option
    pub option_values: Vec<OptionValueResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartItemResponse {
    pub fn new(item: CartItem, option_values: Vec<OptionValue>) -> Self {
        Self {
            id: item.id.to_string(),
            user_id: item.user_id.to_string(),
            product_option_id: item.product_option_id.to_string(),
            quantity: item.quantity,
            option_values: option_values
                .into_iter()
                .map(OptionValueResponse::from)
                .collect(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
