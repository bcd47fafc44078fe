pub mod departments;
pub mod product_categories;
pub mod products;

use serde::Serialize;
use utoipa::ToSchema;

/// Aggregate counters returned by the `/stats` endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ResourceStats {
    pub total: u64,
    pub active: u64,
    pub inactive: u64,
}
