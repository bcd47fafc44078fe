use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::common::ListResponse;
use crate::handlers::departments::DepartmentResponse;
use crate::handlers::product_categories::ProductCategoryResponse;
use crate::handlers::products::ProductResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "prodtrack API",
        description = r#"
Backend API for factory-floor production tracking.

Reference data (departments, work phases, products, product categories) is
managed here; production orders flow through departments and employees log
work against them.

## Pagination

List endpoints take `skip` (offset, default 0) and `limit` (page size,
1-500, default 100) and return `{items, total, page, page_size}` where
`total` is counted before pagination.

## Errors

Failures use a consistent JSON body with the HTTP status category, a
human-readable message and a timestamp. Duplicate keys and references to
missing related entities are reported as 400, missing resources as 404.
        "#
    ),
    tags(
        (name = "departments", description = "Factory department management"),
        (name = "products", description = "Product master data"),
        (name = "product-categories", description = "Product category reference data")
    ),
    paths(
        crate::handlers::departments::list_departments,
        crate::handlers::departments::get_active_departments,
        crate::handlers::departments::get_department_stats,
        crate::handlers::departments::get_department,
        crate::handlers::departments::get_department_with_stats,
        crate::handlers::departments::get_department_by_code,
        crate::handlers::departments::create_department,
        crate::handlers::departments::update_department,
        crate::handlers::departments::delete_department,
        crate::handlers::departments::deactivate_department,
        crate::handlers::departments::activate_department,
        crate::handlers::departments::reorder_departments,
        crate::handlers::products::list_products,
        crate::handlers::products::get_active_products,
        crate::handlers::products::search_products,
        crate::handlers::products::get_product_stats,
        crate::handlers::products::get_product,
        crate::handlers::products::get_product_by_number,
        crate::handlers::products::create_product,
        crate::handlers::products::update_product,
        crate::handlers::products::delete_product,
        crate::handlers::products::deactivate_product,
        crate::handlers::products::activate_product,
        crate::handlers::product_categories::list_product_categories,
        crate::handlers::product_categories::get_product_category,
        crate::handlers::product_categories::get_product_category_by_code,
        crate::handlers::product_categories::create_product_category,
        crate::handlers::product_categories::update_product_category,
        crate::handlers::product_categories::delete_product_category,
    ),
    components(schemas(
        ListResponse<DepartmentResponse>,
        ListResponse<ProductResponse>,
        ListResponse<ProductCategoryResponse>,
        crate::services::ResourceStats,
        crate::errors::ErrorResponse,
    ))
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_generates() {
        let openapi = ApiDoc::openapi();
        let json = serde_json::to_string(&openapi).unwrap();
        assert!(json.contains("prodtrack API"));
        assert!(json.contains("/api/v1/departments"));
        assert!(json.contains("/api/v1/products/search"));
    }
}
