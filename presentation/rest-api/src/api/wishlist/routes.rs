use std::sync::Arc;

use poem::web::Data;
use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::shared::value_objects::Caller;
use business::domain::wishlist::use_cases::create::{
    CreateWishlistItemParams, CreateWishlistItemUseCase,
};
use business::domain::wishlist::use_cases::delete::{
    DeleteWishlistItemParams, DeleteWishlistItemUseCase,
};
use business::domain::wishlist::use_cases::get_all::GetAllWishlistItemsUseCase;
use business::domain::wishlist::use_cases::get_by_id::{
    GetWishlistItemByIdParams, GetWishlistItemByIdUseCase,
};
use business::domain::wishlist::use_cases::get_products_by_user::{
    GetWishlistProductsParams, GetWishlistProductsUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse, MessageResponse, invalid_id};
use crate::api::product::dto::ProductResponse;
use crate::api::tags::ApiTags;
use crate::api::wishlist::dto::{CreateWishlistRequest, WishlistItemResponse};

pub struct WishlistApi {
    get_all_use_case: Arc<dyn GetAllWishlistItemsUseCase>,
    get_products_use_case: Arc<dyn GetWishlistProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetWishlistItemByIdUseCase>,
    create_use_case: Arc<dyn CreateWishlistItemUseCase>,
    delete_use_case: Arc<dyn DeleteWishlistItemUseCase>,
}

impl WishlistApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllWishlistItemsUseCase>,
        get_products_use_case: Arc<dyn GetWishlistProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetWishlistItemByIdUseCase>,
        create_use_case: Arc<dyn CreateWishlistItemUseCase>,
        delete_use_case: Arc<dyn DeleteWishlistItemUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_products_use_case,
            get_by_id_use_case,
            create_use_case,
            delete_use_case,
        }
    }
}

/// Wishlist API
///
/// Only listing the caller's own wishlist requires authentication.
#[OpenApi]
impl WishlistApi {
    /// List every wishlist entry
    #[oai(path = "/wishlist/all", method = "get", tag = "ApiTags::Wishlist")]
    async fn get_all_wishlist_items(&self) -> GetAllWishlistItemsResponse {
        match self.get_all_use_case.execute().await {
            Ok(items) => GetAllWishlistItemsResponse::Ok(Json(
                items.into_iter().map(WishlistItemResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllWishlistItemsResponse::InternalError(json)
            }
        }
    }

    /// List the products on the caller's wishlist
    #[oai(path = "/wishlist", method = "get", tag = "ApiTags::Wishlist")]
    async fn get_wishlist_products(&self, caller: Data<&Caller>) -> GetWishlistProductsResponse {
        let params = GetWishlistProductsParams {
            caller: caller.0.clone(),
        };

        match self.get_products_use_case.execute(params).await {
            Ok(products) => GetWishlistProductsResponse::Ok(Json(
                products.into_iter().map(ProductResponse::from).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetWishlistProductsResponse::Unauthorized(json),
                    _ => GetWishlistProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a wishlist entry by ID
    #[oai(path = "/wishlist/:id", method = "get", tag = "ApiTags::Wishlist")]
    async fn get_wishlist_item(&self, id: Path<String>) -> GetWishlistItemResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return GetWishlistItemResponse::BadRequest(invalid_id("wishlist"));
        };

        match self
            .get_by_id_use_case
            .execute(GetWishlistItemByIdParams { id })
            .await
        {
            Ok(item) => GetWishlistItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetWishlistItemResponse::NotFound(json),
                    _ => GetWishlistItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Add a product to a wishlist
    ///
    /// Adding a product that is already on the wishlist returns the
    /// existing entry.
    #[oai(path = "/wishlist", method = "post", tag = "ApiTags::Wishlist")]
    async fn create_wishlist_item(
        &self,
        caller: Data<&Caller>,
        body: Json<CreateWishlistRequest>,
    ) -> CreateWishlistItemResponse {
        let product_id = match body.0.product_id() {
            Ok(product_id) => product_id,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return CreateWishlistItemResponse::BadRequest(json);
            }
        };

        let params = CreateWishlistItemParams {
            caller: caller.0.clone(),
            user_id: body.0.owner(),
            product_id,
        };

        match self.create_use_case.execute(params).await {
            Ok(item) => CreateWishlistItemResponse::Created(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateWishlistItemResponse::BadRequest(json),
                    _ => CreateWishlistItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a wishlist entry
    #[oai(path = "/wishlist/:id", method = "delete", tag = "ApiTags::Wishlist")]
    async fn delete_wishlist_item(&self, id: Path<String>) -> DeleteWishlistItemResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return DeleteWishlistItemResponse::BadRequest(invalid_id("wishlist"));
        };

        match self
            .delete_use_case
            .execute(DeleteWishlistItemParams { id })
            .await
        {
            Ok(()) => DeleteWishlistItemResponse::Ok(Json(MessageResponse {
                message: "wishlist.deleted".to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteWishlistItemResponse::NotFound(json),
                    _ => DeleteWishlistItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
pub enum GetAllWishlistItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<WishlistItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum GetWishlistProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum GetWishlistItemResponse {
    #[oai(status = 200)]
    Ok(Json<WishlistItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum CreateWishlistItemResponse {
    #[oai(status = 201)]
    Created(Json<WishlistItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum DeleteWishlistItemResponse {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
