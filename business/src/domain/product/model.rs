use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;
use crate::domain::shared::field_update::FieldUpdate;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub unique_features: Option<String>,
    pub is_featured: bool,
    pub city: Option<String>,
    pub district: Option<String>,
    pub category_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw creation input. `name`, `price` and `stock` are required but arrive
/// optional so that their absence is reported by the domain. `category_id` is
/// the client's raw id; blank means no category.
#[derive(Debug, Clone, Default)]
pub struct NewProductProps {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    pub unique_features: Option<String>,
    pub is_featured: Option<bool>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub category_id: Option<String>,
}

/// Partial update. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    pub unique_features: Option<String>,
    pub is_featured: Option<bool>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub category_id: FieldUpdate<String>,
}

impl ProductPatch {
    /// Parses the requested category change. A blank id clears the category.
    pub fn category_update(&self) -> Result<FieldUpdate<Uuid>, ProductError> {
        match &self.category_id {
            FieldUpdate::Unchanged => Ok(FieldUpdate::Unchanged),
            FieldUpdate::Clear => Ok(FieldUpdate::Clear),
            FieldUpdate::Set(raw) if raw.trim().is_empty() => Ok(FieldUpdate::Clear),
            FieldUpdate::Set(raw) => parse_category_id(raw.trim()).map(FieldUpdate::Set),
        }
    }
}

/// Prices are stored as `NUMERIC(12, 2)`; anything finer would be rounded
/// silently by the column, so it is refused here.
fn check_price(price: f64) -> Result<f64, ProductError> {
    let cents = price * 100.0;
    if !cents.is_finite() || (cents - cents.round()).abs() > 1e-6 {
        return Err(ProductError::PricePrecision);
    }
    Ok(price)
}

fn parse_category_id(raw: &str) -> Result<Uuid, ProductError> {
    Uuid::parse_str(raw).map_err(|_| ProductError::MalformedCategoryId)
}

impl Product {
    /// Validates required fields in order (name, price, stock) and stops at
    /// the first one missing.
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        let name = props.name.ok_or(ProductError::NameRequired)?;
        let price = props.price.ok_or(ProductError::PriceRequired)?;
        let stock = props.stock.ok_or(ProductError::StockRequired)?;

        if name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        let price = check_price(price)?;

        let category_id = match props.category_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_category_id(raw)?),
        };

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            description: props.description,
            price,
            stock,
            unique_features: props.unique_features,
            is_featured: props.is_featured.unwrap_or(false),
            city: props.city,
            district: props.district,
            category_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns a copy of this product with the patch merged in.
    pub fn patched(&self, patch: ProductPatch) -> Result<Self, ProductError> {
        if let Some(name) = &patch.name
            && name.trim().is_empty()
        {
            return Err(ProductError::NameEmpty);
        }
        let price = patch.price.map(check_price).transpose()?;
        let category_id = patch.category_update()?;

        Ok(Self {
            id: self.id,
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            description: patch.description.or_else(|| self.description.clone()),
            price: price.unwrap_or(self.price),
            stock: patch.stock.unwrap_or(self.stock),
            unique_features: patch
                .unique_features
                .or_else(|| self.unique_features.clone()),
            is_featured: patch.is_featured.unwrap_or(self.is_featured),
            city: patch.city.or_else(|| self.city.clone()),
            district: patch.district.or_else(|| self.district.clone()),
            category_id: category_id.apply(self.category_id),
            created_at: self.created_at,
            updated_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: Option<String>,
        price: f64,
        stock: i32,
        unique_features: Option<String>,
        is_featured: bool,
        city: Option<String>,
        district: Option<String>,
        category_id: Option<Uuid>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            stock,
            unique_features,
            is_featured,
            city,
            district,
            category_id,
            created_at,
            updated_at,
        }
    }
}
