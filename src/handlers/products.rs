use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use super::common::{
    created_response, default_limit, map_service_error, no_content_response, success_response,
    validate_input, ListResponse,
};
use crate::{
    errors::{ApiError, ErrorResponse},
    handlers::product_categories::ProductCategoryResponse,
    handlers::AppState,
    services::products::{CreateProductInput, ProductWithCategory, UpdateProductInput},
    services::ResourceStats,
};

fn validate_non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        return Err(ValidationError::new("non_negative"));
    }
    Ok(())
}

fn default_true() -> bool {
    true
}

fn default_search_limit() -> u64 {
    10
}

// Request and response DTOs

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    /// Unique item number, e.g. "ABC-001"
    #[validate(length(
        min = 1,
        max = 100,
        message = "Item number must be between 1 and 100 characters"
    ))]
    pub item_number: String,

    pub description: Option<String>,

    /// Code of an existing product category
    #[validate(length(min = 1, max = 50))]
    pub category_code: Option<String>,

    /// Standard manufacturing time per unit, in minutes; >= 0
    #[validate(custom = "validate_non_negative")]
    pub standard_time_minutes: Option<Decimal>,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 100))]
    pub item_number: Option<String>,

    pub description: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub category_code: Option<String>,

    #[validate(custom = "validate_non_negative")]
    pub standard_time_minutes: Option<Decimal>,

    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub id: i32,
    pub item_number: String,
    pub description: Option<String>,
    pub category_code: Option<String>,
    pub standard_time_minutes: Option<Decimal>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Resolved category, when the product has one
    pub category: Option<ProductCategoryResponse>,
}

impl From<ProductWithCategory> for ProductResponse {
    fn from((product, category): ProductWithCategory) -> Self {
        Self {
            id: product.id,
            item_number: product.item_number,
            description: product.description,
            category_code: product.category_code,
            standard_time_minutes: product.standard_time_minutes,
            is_active: product.is_active,
            created_at: product.created_at,
            updated_at: product.updated_at,
            category: category.map(ProductCategoryResponse::from),
        }
    }
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct ListProductsQuery {
    /// Offset into the result set
    #[serde(default)]
    pub skip: u64,

    /// Page size, 1-500
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 500))]
    pub limit: u64,

    /// Case-insensitive match against item number or description
    pub search: Option<String>,

    /// Exact category code filter
    pub category_code: Option<String>,

    /// Keep only active (true) or inactive (false) products
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct ActiveProductsQuery {
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 500))]
    pub limit: u64,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct SearchProductsQuery {
    /// Item number prefix to search for
    #[validate(length(min = 1, message = "Search term must not be empty"))]
    pub q: String,

    #[serde(default = "default_search_limit")]
    #[validate(range(min = 1, max = 50))]
    pub limit: u64,
}

// Handler functions

/// List products with filters and pagination.
#[utoipa::path(
    get,
    path = "/api/v1/products",
    params(ListProductsQuery),
    responses(
        (status = 200, description = "Paginated products", body = ListResponse<ProductResponse>),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&query)?;

    let (products, total) = state
        .services
        .products
        .list_products(
            query.skip,
            query.limit,
            query.search,
            query.category_code,
            query.is_active,
        )
        .await
        .map_err(map_service_error)?;

    let items: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();

    Ok(success_response(ListResponse::new(
        items,
        total,
        query.skip,
        query.limit,
    )))
}

/// Active products ordered by item number; for dropdowns.
#[utoipa::path(
    get,
    path = "/api/v1/products/active",
    params(ActiveProductsQuery),
    responses(
        (status = 200, description = "Active products", body = [ProductResponse]),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn get_active_products(
    State(state): State<AppState>,
    Query(query): Query<ActiveProductsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&query)?;

    let products = state
        .services
        .products
        .list_active(query.limit)
        .await
        .map_err(map_service_error)?;

    let items: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();

    Ok(success_response(items))
}

/// Autocomplete search on item number prefixes, active products only.
///
/// "ABC" finds "ABC-001" and "ABC-002" but not "XABC-003".
#[utoipa::path(
    get,
    path = "/api/v1/products/search",
    params(SearchProductsQuery),
    responses(
        (status = 200, description = "Matching products", body = [ProductResponse]),
        (status = 400, description = "Missing or invalid search term", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn search_products(
    State(state): State<AppState>,
    Query(query): Query<SearchProductsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&query)?;

    let products = state
        .services
        .products
        .search_by_number(&query.q, query.limit)
        .await
        .map_err(map_service_error)?;

    let items: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();

    Ok(success_response(items))
}

/// Aggregate product counts.
#[utoipa::path(
    get,
    path = "/api/v1/products/stats",
    responses((status = 200, description = "Product counts", body = ResourceStats)),
    tag = "products"
)]
pub async fn get_product_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let stats = state
        .services
        .products
        .stats()
        .await
        .map_err(map_service_error)?;

    Ok(success_response(stats))
}

/// Get a product by ID.
#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let product = state
        .services
        .products
        .get_product(id)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| ApiError::NotFound(format!("Product with ID {} not found", id)))?;

    Ok(success_response(ProductResponse::from(product)))
}

/// Get a product by its unique item number.
#[utoipa::path(
    get,
    path = "/api/v1/products/by-number/{item_number}",
    params(("item_number" = String, Path, description = "Item number")),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn get_product_by_number(
    State(state): State<AppState>,
    Path(item_number): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let product = state
        .services
        .products
        .get_product_by_item_number(&item_number)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| {
            ApiError::NotFound(format!("Product with number '{}' not found", item_number))
        })?;

    Ok(success_response(ProductResponse::from(product)))
}

/// Create a new product.
#[utoipa::path(
    post,
    path = "/api/v1/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Duplicate item number or unknown category", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = CreateProductInput {
        item_number: payload.item_number,
        description: payload.description,
        category_code: payload.category_code,
        standard_time_minutes: payload.standard_time_minutes,
        is_active: payload.is_active,
    };

    let product = state
        .services
        .products
        .create_product(input)
        .await
        .map_err(map_service_error)?;

    info!("Product created: {}", product.0.id);

    Ok(created_response(ProductResponse::from(product)))
}

/// Partially update a product. Only fields present in the body change.
#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "Duplicate item number or unknown category", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = UpdateProductInput {
        item_number: payload.item_number,
        description: payload.description,
        category_code: payload.category_code,
        standard_time_minutes: payload.standard_time_minutes,
        is_active: payload.is_active,
    };

    let product = state
        .services
        .products
        .update_product(id, input)
        .await
        .map_err(map_service_error)?;

    info!("Product updated: {}", id);

    Ok(success_response(ProductResponse::from(product)))
}

/// Hard-delete a product and its BOM lines. Prefer deactivation.
#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .products
        .delete_product(id)
        .await
        .map_err(map_service_error)?;

    info!("Product deleted: {}", id);

    Ok(no_content_response())
}

/// Deactivate a product (soft delete). The recommended way to retire one.
#[utoipa::path(
    post,
    path = "/api/v1/products/{id}/deactivate",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deactivated", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn deactivate_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let product = state
        .services
        .products
        .deactivate_product(id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(ProductResponse::from(product)))
}

/// Re-activate a product.
#[utoipa::path(
    post,
    path = "/api/v1/products/{id}/activate",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product activated", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn activate_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let product = state
        .services
        .products
        .activate_product(id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(ProductResponse::from(product)))
}

/// Creates the router for product endpoints
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/", post(create_product))
        .route("/active", get(get_active_products))
        .route("/search", get(search_products))
        .route("/stats", get(get_product_stats))
        .route("/by-number/{item_number}", get(get_product_by_number))
        .route("/{id}", get(get_product))
        .route("/{id}", put(update_product))
        .route("/{id}", delete(delete_product))
        .route("/{id}/deactivate", post(deactivate_product))
        .route("/{id}/activate", post(activate_product))
}
