use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A purchasable variant of a product (size, colour, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct ProductOption {
    pub id: Uuid,
    pub product_id: Uuid,
    pub sku: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ProductOption {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        product_id: Uuid,
        sku: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            product_id,
            sku,
            created_at,
        }
    }
}

/// Display pair describing an option, e.g. `color = navy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionValue {
    pub name: String,
    pub value: String,
}
