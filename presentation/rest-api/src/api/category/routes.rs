use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::category::use_cases::get_all::GetAllCategoriesUseCase;
use business::domain::product::use_cases::get_by_category::{
    GetProductsByCategoryParams, GetProductsByCategoryUseCase,
};

use crate::api::category::dto::CategoryResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_id};
use crate::api::product::dto::ProductResponse;
use crate::api::tags::ApiTags;

pub struct CategoryApi {
    get_all_use_case: Arc<dyn GetAllCategoriesUseCase>,
    get_products_use_case: Arc<dyn GetProductsByCategoryUseCase>,
}

impl CategoryApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllCategoriesUseCase>,
        get_products_use_case: Arc<dyn GetProductsByCategoryUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_products_use_case,
        }
    }
}

/// Category browsing API
#[OpenApi]
impl CategoryApi {
    /// List categories
    #[oai(path = "/category", method = "get", tag = "ApiTags::Categories")]
    async fn get_all_categories(&self) -> GetAllCategoriesResponse {
        match self.get_all_use_case.execute().await {
            Ok(categories) => GetAllCategoriesResponse::Ok(Json(
                categories.into_iter().map(CategoryResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllCategoriesResponse::InternalError(json)
            }
        }
    }

    /// List the products of a category
    #[oai(
        path = "/category/:id/products",
        method = "get",
        tag = "ApiTags::Categories"
    )]
    async fn get_category_products(&self, id: Path<String>) -> GetCategoryProductsResponse {
        let Ok(category_id) = Uuid::parse_str(&id.0) else {
            return GetCategoryProductsResponse::BadRequest(invalid_id("category"));
        };

        match self
            .get_products_use_case
            .execute(GetProductsByCategoryParams { category_id })
            .await
        {
            Ok(products) => GetCategoryProductsResponse::Ok(Json(
                products.into_iter().map(ProductResponse::from).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetCategoryProductsResponse::NotFound(json),
                    _ => GetCategoryProductsResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
pub enum GetAllCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CategoryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum GetCategoryProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
