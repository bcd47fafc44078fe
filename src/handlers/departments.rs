use std::collections::HashMap;

use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use super::common::{
    created_response, default_limit, map_service_error, no_content_response, success_response,
    validate_input, ListResponse,
};
use crate::{
    entities::department,
    errors::{ApiError, ErrorResponse},
    handlers::AppState,
    services::departments::{CreateDepartmentInput, UpdateDepartmentInput},
    services::ResourceStats,
};

lazy_static! {
    static ref HEX_COLOR_RE: Regex = Regex::new("^#[0-9A-Fa-f]{6}$").unwrap();
}

/// Custom validation for planning-board colors ("#FF5733")
fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    if !HEX_COLOR_RE.is_match(color) {
        return Err(ValidationError::new("invalid_hex_color"));
    }
    Ok(())
}

fn default_true() -> bool {
    true
}

// Request and response DTOs

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateDepartmentRequest {
    /// Unique department code, e.g. "LEIKKAUS"
    #[validate(length(
        min = 1,
        max = 20,
        message = "Department code must be between 1 and 20 characters"
    ))]
    pub code: String,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Department name must be between 1 and 100 characters"
    ))]
    pub name: String,

    pub display_order: Option<i32>,

    /// Hex color like "#FF5733"
    #[validate(custom = "validate_hex_color")]
    pub color: Option<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateDepartmentRequest {
    #[validate(length(min = 1, max = 20))]
    pub code: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    pub display_order: Option<i32>,

    #[validate(custom = "validate_hex_color")]
    pub color: Option<String>,

    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DepartmentResponse {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub display_order: Option<i32>,
    pub color: Option<String>,
    pub is_active: bool,
}

impl From<department::Model> for DepartmentResponse {
    fn from(model: department::Model) -> Self {
        Self {
            id: model.id,
            code: model.code,
            name: model.name,
            display_order: model.display_order,
            color: model.color,
            is_active: model.is_active,
        }
    }
}

/// Department plus the counters shown on the department board.
#[derive(Debug, Serialize, ToSchema)]
pub struct DepartmentWithStatsResponse {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub display_order: Option<i32>,
    pub color: Option<String>,
    pub is_active: bool,
    pub work_phase_count: u64,
    pub active_orders_count: u64,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct ListDepartmentsQuery {
    /// Offset into the result set
    #[serde(default)]
    pub skip: u64,

    /// Page size, 1-500
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 500))]
    pub limit: u64,

    /// Case-insensitive match against code or name
    pub search: Option<String>,

    /// Keep only active (true) or inactive (false) departments
    pub is_active: Option<bool>,
}

// Handler functions

/// List departments with filters and pagination.
#[utoipa::path(
    get,
    path = "/api/v1/departments",
    params(ListDepartmentsQuery),
    responses(
        (status = 200, description = "Paginated departments", body = ListResponse<DepartmentResponse>),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse)
    ),
    tag = "departments"
)]
pub async fn list_departments(
    State(state): State<AppState>,
    Query(query): Query<ListDepartmentsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&query)?;

    let (departments, total) = state
        .services
        .departments
        .list_departments(query.skip, query.limit, query.search, query.is_active)
        .await
        .map_err(map_service_error)?;

    let items: Vec<DepartmentResponse> =
        departments.into_iter().map(DepartmentResponse::from).collect();

    Ok(success_response(ListResponse::new(
        items,
        total,
        query.skip,
        query.limit,
    )))
}

/// All active departments in display order; for dropdowns and navigation.
#[utoipa::path(
    get,
    path = "/api/v1/departments/active",
    responses(
        (status = 200, description = "Active departments in display order", body = [DepartmentResponse])
    ),
    tag = "departments"
)]
pub async fn get_active_departments(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let departments = state
        .services
        .departments
        .list_active_ordered()
        .await
        .map_err(map_service_error)?;

    let items: Vec<DepartmentResponse> =
        departments.into_iter().map(DepartmentResponse::from).collect();

    Ok(success_response(items))
}

/// Aggregate department counts.
#[utoipa::path(
    get,
    path = "/api/v1/departments/stats",
    responses((status = 200, description = "Department counts", body = ResourceStats)),
    tag = "departments"
)]
pub async fn get_department_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let stats = state
        .services
        .departments
        .stats()
        .await
        .map_err(map_service_error)?;

    Ok(success_response(stats))
}

/// Get a department by ID.
#[utoipa::path(
    get,
    path = "/api/v1/departments/{id}",
    params(("id" = i32, Path, description = "Department ID")),
    responses(
        (status = 200, description = "Department found", body = DepartmentResponse),
        (status = 404, description = "Department not found", body = ErrorResponse)
    ),
    tag = "departments"
)]
pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let department = state
        .services
        .departments
        .get_department(id)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| ApiError::NotFound(format!("Department with ID {} not found", id)))?;

    Ok(success_response(DepartmentResponse::from(department)))
}

/// Get a department together with its work-phase and order counts.
#[utoipa::path(
    get,
    path = "/api/v1/departments/{id}/with-stats",
    params(("id" = i32, Path, description = "Department ID")),
    responses(
        (status = 200, description = "Department with counters", body = DepartmentWithStatsResponse),
        (status = 404, description = "Department not found", body = ErrorResponse)
    ),
    tag = "departments"
)]
pub async fn get_department_with_stats(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .services
        .departments
        .get_department_with_stats(id)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| ApiError::NotFound(format!("Department with ID {} not found", id)))?;

    let department = result.department;
    Ok(success_response(DepartmentWithStatsResponse {
        id: department.id,
        code: department.code,
        name: department.name,
        display_order: department.display_order,
        color: department.color,
        is_active: department.is_active,
        work_phase_count: result.work_phase_count,
        active_orders_count: result.active_orders_count,
    }))
}

/// Get a department by its unique code.
#[utoipa::path(
    get,
    path = "/api/v1/departments/by-code/{code}",
    params(("code" = String, Path, description = "Department code")),
    responses(
        (status = 200, description = "Department found", body = DepartmentResponse),
        (status = 404, description = "Department not found", body = ErrorResponse)
    ),
    tag = "departments"
)]
pub async fn get_department_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let department = state
        .services
        .departments
        .get_department_by_code(&code)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| ApiError::NotFound(format!("Department with code '{}' not found", code)))?;

    Ok(success_response(DepartmentResponse::from(department)))
}

/// Create a new department.
#[utoipa::path(
    post,
    path = "/api/v1/departments",
    request_body = CreateDepartmentRequest,
    responses(
        (status = 201, description = "Department created", body = DepartmentResponse),
        (status = 400, description = "Duplicate code or invalid payload", body = ErrorResponse)
    ),
    tag = "departments"
)]
pub async fn create_department(
    State(state): State<AppState>,
    Json(payload): Json<CreateDepartmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = CreateDepartmentInput {
        code: payload.code,
        name: payload.name,
        display_order: payload.display_order,
        color: payload.color,
        is_active: payload.is_active,
    };

    let department = state
        .services
        .departments
        .create_department(input)
        .await
        .map_err(map_service_error)?;

    info!("Department created: {}", department.id);

    Ok(created_response(DepartmentResponse::from(department)))
}

/// Partially update a department. Only fields present in the body change.
#[utoipa::path(
    put,
    path = "/api/v1/departments/{id}",
    params(("id" = i32, Path, description = "Department ID")),
    request_body = UpdateDepartmentRequest,
    responses(
        (status = 200, description = "Department updated", body = DepartmentResponse),
        (status = 400, description = "Duplicate code or invalid payload", body = ErrorResponse),
        (status = 404, description = "Department not found", body = ErrorResponse)
    ),
    tag = "departments"
)]
pub async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDepartmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = UpdateDepartmentInput {
        code: payload.code,
        name: payload.name,
        display_order: payload.display_order,
        color: payload.color,
        is_active: payload.is_active,
    };

    let department = state
        .services
        .departments
        .update_department(id, input)
        .await
        .map_err(map_service_error)?;

    info!("Department updated: {}", id);

    Ok(success_response(DepartmentResponse::from(department)))
}

/// Hard-delete a department and its work phases. Prefer deactivation.
#[utoipa::path(
    delete,
    path = "/api/v1/departments/{id}",
    params(("id" = i32, Path, description = "Department ID")),
    responses(
        (status = 204, description = "Department deleted"),
        (status = 404, description = "Department not found", body = ErrorResponse)
    ),
    tag = "departments"
)]
pub async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .departments
        .delete_department(id)
        .await
        .map_err(map_service_error)?;

    info!("Department deleted: {}", id);

    Ok(no_content_response())
}

/// Deactivate a department (soft delete). The recommended way to retire one.
#[utoipa::path(
    post,
    path = "/api/v1/departments/{id}/deactivate",
    params(("id" = i32, Path, description = "Department ID")),
    responses(
        (status = 200, description = "Department deactivated", body = DepartmentResponse),
        (status = 404, description = "Department not found", body = ErrorResponse)
    ),
    tag = "departments"
)]
pub async fn deactivate_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let department = state
        .services
        .departments
        .deactivate_department(id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(DepartmentResponse::from(department)))
}

/// Re-activate a department.
#[utoipa::path(
    post,
    path = "/api/v1/departments/{id}/activate",
    params(("id" = i32, Path, description = "Department ID")),
    responses(
        (status = 200, description = "Department activated", body = DepartmentResponse),
        (status = 404, description = "Department not found", body = ErrorResponse)
    ),
    tag = "departments"
)]
pub async fn activate_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let department = state
        .services
        .departments
        .activate_department(id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(DepartmentResponse::from(department)))
}

/// Bulk-update display orders.
///
/// Body maps department id to its new display order, e.g. `{"1": 0, "2": 1}`.
/// Unknown ids are skipped; the response lists only the departments that
/// were updated.
#[utoipa::path(
    post,
    path = "/api/v1/departments/reorder",
    request_body = HashMap<i32, i32>,
    responses(
        (status = 200, description = "Updated departments", body = [DepartmentResponse])
    ),
    tag = "departments"
)]
pub async fn reorder_departments(
    State(state): State<AppState>,
    Json(order_mapping): Json<HashMap<i32, i32>>,
) -> Result<impl IntoResponse, ApiError> {
    let departments = state
        .services
        .departments
        .reorder_departments(order_mapping)
        .await
        .map_err(map_service_error)?;

    let items: Vec<DepartmentResponse> =
        departments.into_iter().map(DepartmentResponse::from).collect();

    Ok(success_response(items))
}

/// Creates the router for department endpoints
pub fn department_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_departments))
        .route("/", post(create_department))
        .route("/active", get(get_active_departments))
        .route("/stats", get(get_department_stats))
        .route("/reorder", post(reorder_departments))
        .route("/by-code/{code}", get(get_department_by_code))
        .route("/{id}", get(get_department))
        .route("/{id}", put(update_department))
        .route("/{id}", delete(delete_department))
        .route("/{id}/with-stats", get(get_department_with_stats))
        .route("/{id}/deactivate", post(deactivate_department))
        .route("/{id}/activate", post(activate_department))
}
