use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use super::common::{
    created_response, default_limit, map_service_error, no_content_response, success_response,
    validate_input, ListResponse,
};
use crate::{
    entities::product_category,
    errors::{ApiError, ErrorResponse},
    handlers::AppState,
    services::product_categories::{CreateProductCategoryInput, UpdateProductCategoryInput},
};

fn validate_non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        return Err(ValidationError::new("non_negative"));
    }
    Ok(())
}

fn default_multiplier() -> Decimal {
    dec!(1.00)
}

// Request and response DTOs

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductCategoryRequest {
    /// Unique category code, e.g. "A"
    #[validate(length(
        min = 1,
        max = 50,
        message = "Category code must be between 1 and 50 characters"
    ))]
    pub code: String,

    #[validate(length(max = 100))]
    pub name: Option<String>,

    /// Multiplier applied to standard times in efficiency reporting; >= 0
    #[serde(default = "default_multiplier")]
    #[validate(custom = "validate_non_negative")]
    pub efficiency_multiplier: Decimal,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProductCategoryRequest {
    #[validate(length(min = 1, max = 50))]
    pub code: Option<String>,

    #[validate(length(max = 100))]
    pub name: Option<String>,

    #[validate(custom = "validate_non_negative")]
    pub efficiency_multiplier: Option<Decimal>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductCategoryResponse {
    pub id: i32,
    pub code: String,
    pub name: Option<String>,
    pub efficiency_multiplier: Decimal,
}

impl From<product_category::Model> for ProductCategoryResponse {
    fn from(model: product_category::Model) -> Self {
        Self {
            id: model.id,
            code: model.code,
            name: model.name,
            efficiency_multiplier: model.efficiency_multiplier,
        }
    }
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct ListProductCategoriesQuery {
    #[serde(default)]
    pub skip: u64,

    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 500))]
    pub limit: u64,

    /// Case-insensitive match against code or name
    pub search: Option<String>,
}

// Handler functions

/// List categories ordered by code.
#[utoipa::path(
    get,
    path = "/api/v1/product-categories",
    params(ListProductCategoriesQuery),
    responses(
        (status = 200, description = "Paginated categories", body = ListResponse<ProductCategoryResponse>),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse)
    ),
    tag = "product-categories"
)]
pub async fn list_product_categories(
    State(state): State<AppState>,
    Query(query): Query<ListProductCategoriesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&query)?;

    let (categories, total) = state
        .services
        .product_categories
        .list_categories(query.skip, query.limit, query.search)
        .await
        .map_err(map_service_error)?;

    let items: Vec<ProductCategoryResponse> = categories
        .into_iter()
        .map(ProductCategoryResponse::from)
        .collect();

    Ok(success_response(ListResponse::new(
        items,
        total,
        query.skip,
        query.limit,
    )))
}

/// Get a category by ID.
#[utoipa::path(
    get,
    path = "/api/v1/product-categories/{id}",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category found", body = ProductCategoryResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "product-categories"
)]
pub async fn get_product_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let category = state
        .services
        .product_categories
        .get_category(id)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| ApiError::NotFound(format!("Category with ID {} not found", id)))?;

    Ok(success_response(ProductCategoryResponse::from(category)))
}

/// Get a category by its unique code.
#[utoipa::path(
    get,
    path = "/api/v1/product-categories/by-code/{code}",
    params(("code" = String, Path, description = "Category code")),
    responses(
        (status = 200, description = "Category found", body = ProductCategoryResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "product-categories"
)]
pub async fn get_product_category_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let category = state
        .services
        .product_categories
        .get_category_by_code(&code)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| ApiError::NotFound(format!("Category with code '{}' not found", code)))?;

    Ok(success_response(ProductCategoryResponse::from(category)))
}

/// Create a new category.
#[utoipa::path(
    post,
    path = "/api/v1/product-categories",
    request_body = CreateProductCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = ProductCategoryResponse),
        (status = 400, description = "Duplicate code or invalid payload", body = ErrorResponse)
    ),
    tag = "product-categories"
)]
pub async fn create_product_category(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductCategoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = CreateProductCategoryInput {
        code: payload.code,
        name: payload.name,
        efficiency_multiplier: payload.efficiency_multiplier,
    };

    let category = state
        .services
        .product_categories
        .create_category(input)
        .await
        .map_err(map_service_error)?;

    info!("Category created: {}", category.id);

    Ok(created_response(ProductCategoryResponse::from(category)))
}

/// Partially update a category.
#[utoipa::path(
    put,
    path = "/api/v1/product-categories/{id}",
    params(("id" = i32, Path, description = "Category ID")),
    request_body = UpdateProductCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = ProductCategoryResponse),
        (status = 400, description = "Duplicate code or invalid payload", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "product-categories"
)]
pub async fn update_product_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProductCategoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = UpdateProductCategoryInput {
        code: payload.code,
        name: payload.name,
        efficiency_multiplier: payload.efficiency_multiplier,
    };

    let category = state
        .services
        .product_categories
        .update_category(id, input)
        .await
        .map_err(map_service_error)?;

    info!("Category updated: {}", id);

    Ok(success_response(ProductCategoryResponse::from(category)))
}

/// Hard-delete a category.
#[utoipa::path(
    delete,
    path = "/api/v1/product-categories/{id}",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "product-categories"
)]
pub async fn delete_product_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .product_categories
        .delete_category(id)
        .await
        .map_err(map_service_error)?;

    info!("Category deleted: {}", id);

    Ok(no_content_response())
}

/// Creates the router for product category endpoints
pub fn product_category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_product_categories))
        .route("/", post(create_product_category))
        .route("/by-code/{code}", get(get_product_category_by_code))
        .route("/{id}", get(get_product_category))
        .route("/{id}", put(update_product_category))
        .route("/{id}", delete(delete_product_category))
}
