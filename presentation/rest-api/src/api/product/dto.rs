use chrono::{DateTime, Utc};
use poem_openapi::Object;
use poem_openapi::types::MaybeUndefined;

use business::domain::product::model::{NewProductProps, Product, ProductPatch};
use business::domain::product::option::OptionValue;
use business::domain::shared::field_update::FieldUpdate;

/// Required fields are optional here so that their absence surfaces as a
/// domain validation error rather than a body parse failure.
#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (required, cannot be blank)
    pub name: Option<String>,
    pub description: Option<String>,
    /// Unit price (required)
    pub price: Option<f64>,
    /// Units in stock (required)
    pub stock: Option<i32>,
    pub unique_features: Option<String>,
    /// Defaults to false
    pub is_featured: Option<bool>,
    pub city: Option<String>,
    pub district: Option<String>,
    /// Category id; empty or absent means no category
    pub category_id: Option<String>,
}

impl From<CreateProductRequest> for NewProductProps {
    fn from(request: CreateProductRequest) -> Self {
        NewProductProps {
            name: request.name,
            description: request.description,
            price: request.price,
            stock: request.stock,
            unique_features: request.unique_features,
            is_featured: request.is_featured,
            city: request.city,
            district: request.district,
            category_id: request.category_id,
        }
    }
}

/// Partial update. Absent or null scalars keep their stored value;
/// `category_id: null` unlinks the category.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    pub unique_features: Option<String>,
    pub is_featured: Option<bool>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub category_id: MaybeUndefined<String>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(request: UpdateProductRequest) -> Self {
        let category_id = match request.category_id {
            MaybeUndefined::Undefined => FieldUpdate::Unchanged,
            MaybeUndefined::Null => FieldUpdate::Clear,
            MaybeUndefined::Value(raw) => FieldUpdate::Set(raw),
        };

        ProductPatch {
            name: request.name,
            description: request.description,
            price: request.price,
            stock: request.stock,
            unique_features: request.unique_features,
            is_featured: request.is_featured,
            city: request.city,
            district: request.district,
            category_id,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    #[oai(skip_serializing_if_is_none)]
    pub unique_features: Option<String>,
    pub is_featured: bool,
    #[oai(skip_serializing_if_is_none)]
    pub city: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub district: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub category_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            unique_features: product.unique_features,
            is_featured: product.is_featured,
            city: product.city,
            district: product.district,
            category_id: product.category_id.map(|id| id.to_string()),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Display pair of a product option, e.g. `size = M`.
#[derive(Debug, Clone, Object)]
pub struct OptionValueResponse {
    pub name: String,
    pub value: String,
}

impl From<OptionValue> for OptionValueResponse {
    fn from(value: OptionValue) -> Self {
        Self {
            name: value.name,
            value: value.value,
        }
    }
}
