use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::{FromPrimitive, ToPrimitive};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::option::{OptionValue, ProductOption};

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub stock: i32,
    pub unique_features: Option<String>,
    pub is_featured: bool,
    pub city: Option<String>,
    pub district: Option<String>,
    pub category_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let price = self.price.to_f64().ok_or(RepositoryError::CorruptedRow)?;

        Ok(Product::from_repository(
            self.id,
            self.name,
            self.description,
            price,
            self.stock,
            self.unique_features,
            self.is_featured,
            self.city,
            self.district,
            self.category_id,
            self.created_at,
            self.updated_at,
        ))
    }
}

/// Converts a domain price into the `NUMERIC` column value.
pub fn price_to_column(price: f64) -> Result<BigDecimal, RepositoryError> {
    BigDecimal::from_f64(price).ok_or(RepositoryError::CorruptedRow)
}

#[derive(Debug, FromRow)]
pub struct ProductOptionEntity {
    pub id: Uuid,
    pub product_id: Uuid,
    pub sku: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ProductOptionEntity {
    pub fn into_domain(self) -> ProductOption {
        ProductOption::from_repository(self.id, self.product_id, self.sku, self.created_at)
    }
}

#[derive(Debug, FromRow)]
pub struct OptionValueEntity {
    pub name: String,
    pub value: String,
}

impl OptionValueEntity {
    pub fn into_domain(self) -> OptionValue {
        OptionValue {
            name: self.name,
            value: self.value,
        }
    }
}
