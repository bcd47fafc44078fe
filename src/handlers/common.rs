use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::errors::{ApiError, ServiceError};

/// Standard success response
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// Standard created response
pub fn created_response<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(data)).into_response()
}

/// Standard no content response
pub fn no_content_response() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Validate request input
pub fn validate_input<T: Validate>(input: &T) -> Result<(), ApiError> {
    input
        .validate()
        .map_err(|e| ApiError::ValidationError(format!("Validation failed: {}", e)))
}

/// Map service errors to API errors
pub fn map_service_error(err: ServiceError) -> ApiError {
    ApiError::ServiceError(err)
}

/// Default page size for list endpoints
pub fn default_limit() -> u64 {
    100
}

/// Standard paginated list body.
///
/// `page` is derived from the skip/limit pair the client sent:
/// `skip / limit + 1`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
}

impl<T> ListResponse<T> {
    pub fn new(items: Vec<T>, total: u64, skip: u64, limit: u64) -> Self {
        let page = if limit > 0 { skip / limit + 1 } else { 1 };
        Self {
            items,
            total,
            page,
            page_size: limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_is_derived_from_skip_and_limit() {
        let response = ListResponse::new(vec![1, 2, 3], 42, 0, 100);
        assert_eq!(response.page, 1);
        assert_eq!(response.page_size, 100);

        let response = ListResponse::new(Vec::<i32>::new(), 42, 30, 10);
        assert_eq!(response.page, 4);

        // skip not aligned to limit still floors
        let response = ListResponse::new(Vec::<i32>::new(), 42, 25, 10);
        assert_eq!(response.page, 3);
    }
}
