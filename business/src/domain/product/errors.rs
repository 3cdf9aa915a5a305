use crate::domain::authorization::errors::AccessError;
use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_required")]
    NameRequired,
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.price_required")]
    PriceRequired,
    #[error("product.price_precision")]
    PricePrecision,
    #[error("product.stock_required")]
    StockRequired,
    #[error("product.not_found")]
    NotFound,
    #[error("product.option_not_found")]
    OptionNotFound,
    #[error("product.malformed_category_id")]
    MalformedCategoryId,
    #[error("product.invalid_category")]
    InvalidCategory,
    #[error("category.not_found")]
    CategoryNotFound,
    #[error(transparent)]
    Access(#[from] AccessError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
