use std::sync::Arc;

use poem::http::StatusCode;
use poem::web::Data;
use poem_openapi::{
    ApiResponse, OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::cart::model::CartItem;
use business::domain::cart::use_cases::create::{CreateCartItemParams, CreateCartItemUseCase};
use business::domain::cart::use_cases::delete::{DeleteCartItemParams, DeleteCartItemUseCase};
use business::domain::cart::use_cases::get_by_id::{
    GetCartItemByIdParams, GetCartItemByIdUseCase,
};
use business::domain::cart::use_cases::get_paginated::{
    GetPaginatedCartItemsParams, GetPaginatedCartItemsUseCase,
};
use business::domain::cart::use_cases::get_user_cart::{GetUserCartParams, GetUserCartUseCase};
use business::domain::cart::use_cases::update::{UpdateCartItemParams, UpdateCartItemUseCase};
use business::domain::cart::validator::CartPayload;
use business::domain::product::errors::ProductError;
use business::domain::product::use_cases::get_option_values::{
    GetOptionValuesParams, GetOptionValuesUseCase,
};
use business::domain::shared::value_objects::Caller;

use crate::api::cart::dto::{CartItemResponse, CreateCartRequest, UpdateCartRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse, MessageResponse, invalid_id};
use crate::api::tags::ApiTags;

type ErrorParts = (StatusCode, Json<ErrorResponse>);

pub struct CartApi {
    get_paginated_use_case: Arc<dyn GetPaginatedCartItemsUseCase>,
    get_by_id_use_case: Arc<dyn GetCartItemByIdUseCase>,
    create_use_case: Arc<dyn CreateCartItemUseCase>,
    update_use_case: Arc<dyn UpdateCartItemUseCase>,
    delete_use_case: Arc<dyn DeleteCartItemUseCase>,
    get_user_cart_use_case: Arc<dyn GetUserCartUseCase>,
    get_option_values_use_case: Arc<dyn GetOptionValuesUseCase>,
}

impl CartApi {
    pub fn new(
        get_paginated_use_case: Arc<dyn GetPaginatedCartItemsUseCase>,
        get_by_id_use_case: Arc<dyn GetCartItemByIdUseCase>,
        create_use_case: Arc<dyn CreateCartItemUseCase>,
        update_use_case: Arc<dyn UpdateCartItemUseCase>,
        delete_use_case: Arc<dyn DeleteCartItemUseCase>,
        get_user_cart_use_case: Arc<dyn GetUserCartUseCase>,
        get_option_values_use_case: Arc<dyn GetOptionValuesUseCase>,
    ) -> Self {
        Self {
            get_paginated_use_case,
            get_by_id_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
            get_user_cart_use_case,
            get_option_values_use_case,
        }
    }

    /// Joins an item with the display values of its option. An option that
    /// vanished since the item was written renders with no values.
    async fn to_response(&self, item: CartItem) -> Result<CartItemResponse, ErrorParts> {
        let params = GetOptionValuesParams {
            option_id: item.product_option_id,
        };
        match self.get_option_values_use_case.execute(params).await {
            Ok(values) => Ok(CartItemResponse::new(item, values)),
            Err(ProductError::OptionNotFound) => Ok(CartItemResponse::new(item, Vec::new())),
            Err(err) => Err(err.into_error_response()),
        }
    }

    async fn to_responses(&self, items: Vec<CartItem>) -> Result<Vec<CartItemResponse>, ErrorParts> {
        let mut responses = Vec::with_capacity(items.len());
        for item in items {
            responses.push(self.to_response(item).await?);
        }
        Ok(responses)
    }
}

/// Shopping cart API
///
/// Every endpoint requires an authenticated caller. Single items are visible
/// to their owner or to holders of the matching group permission.
#[OpenApi]
impl CartApi {
    /// List all cart items
    ///
    /// Paginated, newest first. Requires the global `view_carts` permission.
    #[oai(path = "/cart/all", method = "get", tag = "ApiTags::Cart")]
    async fn get_all_cart_items(
        &self,
        caller: Data<&Caller>,
        page: Query<Option<i64>>,
        limit: Query<Option<i64>>,
    ) -> CartListResponse {
        let params = GetPaginatedCartItemsParams {
            caller: caller.0.clone(),
            page: page.0,
            limit: limit.0,
        };

        match self.get_paginated_use_case.execute(params).await {
            Ok(items) => match self.to_responses(items).await {
                Ok(responses) => CartListResponse::Ok(Json(responses)),
                Err(parts) => CartListResponse::from_error(parts),
            },
            Err(err) => CartListResponse::from_error(err.into_error_response()),
        }
    }

    /// Get the current user's cart
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_user_cart(&self, caller: Data<&Caller>) -> CartListResponse {
        let params = GetUserCartParams {
            caller: caller.0.clone(),
        };

        match self.get_user_cart_use_case.execute(params).await {
            Ok(items) => match self.to_responses(items).await {
                Ok(responses) => CartListResponse::Ok(Json(responses)),
                Err(parts) => CartListResponse::from_error(parts),
            },
            Err(err) => CartListResponse::from_error(err.into_error_response()),
        }
    }

    /// Get a cart item by ID
    #[oai(path = "/cart/:id", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart_item(&self, caller: Data<&Caller>, id: Path<String>) -> CartItemResult {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return CartItemResult::BadRequest(invalid_id("cart"));
        };

        let params = GetCartItemByIdParams {
            caller: caller.0.clone(),
            id,
        };

        match self.get_by_id_use_case.execute(params).await {
            Ok(item) => match self.to_response(item).await {
                Ok(response) => CartItemResult::Ok(Json(response)),
                Err(parts) => CartItemResult::from_error(parts),
            },
            Err(err) => CartItemResult::from_error(err.into_error_response()),
        }
    }

    /// Add an item to the caller's cart
    #[oai(path = "/cart", method = "post", tag = "ApiTags::Cart")]
    async fn create_cart_item(
        &self,
        caller: Data<&Caller>,
        body: Json<CreateCartRequest>,
    ) -> CreateCartItemResponse {
        let params = CreateCartItemParams {
            caller: caller.0.clone(),
            payload: CartPayload::from(body.0),
        };

        match self.create_use_case.execute(params).await {
            Ok(item) => match self.to_response(item).await {
                Ok(response) => CreateCartItemResponse::Created(Json(response)),
                Err(parts) => CreateCartItemResponse::from_error(parts),
            },
            Err(err) => CreateCartItemResponse::from_error(err.into_error_response()),
        }
    }

    /// Update a cart item
    #[oai(path = "/cart/:id", method = "put", tag = "ApiTags::Cart")]
    async fn update_cart_item(
        &self,
        caller: Data<&Caller>,
        id: Path<String>,
        body: Json<UpdateCartRequest>,
    ) -> CartItemResult {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return CartItemResult::BadRequest(invalid_id("cart"));
        };

        let params = UpdateCartItemParams {
            caller: caller.0.clone(),
            id,
            payload: CartPayload::from(body.0),
        };

        match self.update_use_case.execute(params).await {
            Ok(item) => match self.to_response(item).await {
                Ok(response) => CartItemResult::Ok(Json(response)),
                Err(parts) => CartItemResult::from_error(parts),
            },
            Err(err) => CartItemResult::from_error(err.into_error_response()),
        }
    }

    /// Remove a cart item
    #[oai(path = "/cart/:id", method = "delete", tag = "ApiTags::Cart")]
    async fn delete_cart_item(
        &self,
        caller: Data<&Caller>,
        id: Path<String>,
    ) -> DeleteCartItemResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return DeleteCartItemResponse::BadRequest(invalid_id("cart"));
        };

        let params = DeleteCartItemParams {
            caller: caller.0.clone(),
            id,
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteCartItemResponse::Ok(Json(MessageResponse {
                message: "cart.deleted".to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => DeleteCartItemResponse::Unauthorized(json),
                    403 => DeleteCartItemResponse::Forbidden(json),
                    404 => DeleteCartItemResponse::NotFound(json),
                    _ => DeleteCartItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
pub enum CartListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CartItemResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CartListResponse {
    fn from_error((status, json): ErrorParts) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            401 => Self::Unauthorized(json),
            403 => Self::Forbidden(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(ApiResponse)]
pub enum CartItemResult {
    #[oai(status = 200)]
    Ok(Json<CartItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CartItemResult {
    fn from_error((status, json): ErrorParts) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            401 => Self::Unauthorized(json),
            403 => Self::Forbidden(json),
            404 => Self::NotFound(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(ApiResponse)]
pub enum CreateCartItemResponse {
    #[oai(status = 201)]
    Created(Json<CartItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CreateCartItemResponse {
    fn from_error((status, json): ErrorParts) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            401 => Self::Unauthorized(json),
            403 => Self::Forbidden(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(ApiResponse)]
pub enum DeleteCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::authorization::errors::AccessError;
    use business::domain::cart::errors::CartError;
    use business::domain::product::option::OptionValue;
    use business::domain::shared::value_objects::UserId;
    use mockall::mock;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;

    mock! {
        Paginated {}
        #[async_trait]
        impl GetPaginatedCartItemsUseCase for Paginated {
            async fn execute(&self, params: GetPaginatedCartItemsParams) -> Result<Vec<CartItem>, CartError>;
        }
    }

    mock! {
        ById {}
        #[async_trait]
        impl GetCartItemByIdUseCase for ById {
            async fn execute(&self, params: GetCartItemByIdParams) -> Result<CartItem, CartError>;
        }
    }

    mock! {
        Create {}
        #[async_trait]
        impl CreateCartItemUseCase for Create {
            async fn execute(&self, params: CreateCartItemParams) -> Result<CartItem, CartError>;
        }
    }

    mock! {
        Update {}
        #[async_trait]
        impl UpdateCartItemUseCase for Update {
            async fn execute(&self, params: UpdateCartItemParams) -> Result<CartItem, CartError>;
        }
    }

    mock! {
        Delete {}
        #[async_trait]
        impl DeleteCartItemUseCase for Delete {
            async fn execute(&self, params: DeleteCartItemParams) -> Result<(), CartError>;
        }
    }

    mock! {
        UserCart {}
        #[async_trait]
        impl GetUserCartUseCase for UserCart {
            async fn execute(&self, params: GetUserCartParams) -> Result<Vec<CartItem>, CartError>;
        }
    }

    mock! {
        OptionValues {}
        #[async_trait]
        impl GetOptionValuesUseCase for OptionValues {
            async fn execute(&self, params: GetOptionValuesParams) -> Result<Vec<OptionValue>, ProductError>;
        }
    }

    fn client(
        by_id: MockById,
        user_cart: MockUserCart,
        option_values: MockOptionValues,
    ) -> TestClient<poem::endpoint::BoxEndpoint<'static>> {
        client_with_create(by_id, user_cart, option_values, MockCreate::new())
    }

    fn client_with_create(
        by_id: MockById,
        user_cart: MockUserCart,
        option_values: MockOptionValues,
        create: MockCreate,
    ) -> TestClient<poem::endpoint::BoxEndpoint<'static>> {
        let api = CartApi::new(
            Arc::new(MockPaginated::new()),
            Arc::new(by_id),
            Arc::new(create),
            Arc::new(MockUpdate::new()),
            Arc::new(MockDelete::new()),
            Arc::new(user_cart),
            Arc::new(option_values),
        );
        TestClient::new(OpenApiService::new(api, "Storefront API", "test"))
    }

    fn buyer() -> Caller {
        Caller::Authenticated(UserId::new("buyer"))
    }

    #[tokio::test]
    async fn should_join_option_values_into_cart_items() {
        let item = CartItem::new(UserId::new("buyer"), Uuid::new_v4(), 2).unwrap();
        let option_id = item.product_option_id;

        let mut user_cart = MockUserCart::new();
        user_cart
            .expect_execute()
            .returning(move |_| Ok(vec![item.clone()]));
        let mut option_values = MockOptionValues::new();
        option_values
            .expect_execute()
            .withf(move |params| params.option_id == option_id)
            .returning(|_| {
                Ok(vec![OptionValue {
                    name: "size".to_string(),
                    value: "M".to_string(),
                }])
            });

        let resp = client(MockById::new(), user_cart, option_values)
            .get("/cart")
            .data(buyer())
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let items = json.value().array();
        items.assert_len(1);
        let values = items.get(0).object().get("option_values").array();
        values.assert_len(1);
        values.get(0).object().get("value").assert_string("M");
    }

    #[tokio::test]
    async fn should_render_empty_values_when_option_is_gone() {
        let item = CartItem::new(UserId::new("buyer"), Uuid::new_v4(), 1).unwrap();
        let id = item.id;

        let mut by_id = MockById::new();
        by_id
            .expect_execute()
            .withf(move |params| params.id == id)
            .returning(move |_| Ok(item.clone()));
        let mut option_values = MockOptionValues::new();
        option_values
            .expect_execute()
            .returning(|_| Err(ProductError::OptionNotFound));

        let resp = client(by_id, MockUserCart::new(), option_values)
            .get(format!("/cart/{id}"))
            .data(buyer())
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.json()
            .await
            .value()
            .object()
            .get("option_values")
            .array()
            .assert_is_empty();
    }

    #[tokio::test]
    async fn should_answer_forbidden_with_error_body() {
        let mut by_id = MockById::new();
        by_id
            .expect_execute()
            .returning(|_| Err(CartError::Access(AccessError::Forbidden)));

        let resp = client(by_id, MockUserCart::new(), MockOptionValues::new())
            .get(format!("/cart/{}", Uuid::new_v4()))
            .data(buyer())
            .send()
            .await;

        resp.assert_status(StatusCode::FORBIDDEN);
        let json = resp.json().await;
        let body = json.value().object();
        body.get("name").assert_string("Forbidden");
        body.get("message").assert_string("auth.permission_denied");
    }

    #[tokio::test]
    async fn should_reject_malformed_path_id_before_use_case() {
        let resp = client(MockById::new(), MockUserCart::new(), MockOptionValues::new())
            .get("/cart/not-a-uuid")
            .data(buyer())
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.json()
            .await
            .value()
            .object()
            .get("message")
            .assert_string("cart.invalid_id");
    }

    #[tokio::test]
    async fn should_answer_unauthorized_to_anonymous_create_with_malformed_body() {
        let mut create = MockCreate::new();
        create
            .expect_execute()
            .withf(|params| {
                params.caller == Caller::Anonymous
                    && params.payload.product_option_id.as_deref() == Some("not-a-uuid")
            })
            .returning(|_| Err(CartError::Access(AccessError::Unauthenticated)));

        let resp = client_with_create(
            MockById::new(),
            MockUserCart::new(),
            MockOptionValues::new(),
            create,
        )
        .post("/cart")
        .body_json(&serde_json::json!({ "product_option_id": "not-a-uuid", "quantity": 1 }))
        .data(Caller::Anonymous)
        .send()
        .await;

        resp.assert_status(StatusCode::UNAUTHORIZED);
        resp.json()
            .await
            .value()
            .object()
            .get("message")
            .assert_string("auth.unauthenticated");
    }
}
