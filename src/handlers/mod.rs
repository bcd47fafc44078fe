pub mod common;
pub mod departments;
pub mod product_categories;
pub mod products;

use std::sync::Arc;

use crate::db::DbPool;
use crate::services::{
    departments::DepartmentService, product_categories::ProductCategoryService,
    products::ProductService,
};

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub departments: Arc<DepartmentService>,
    pub products: Arc<ProductService>,
    pub product_categories: Arc<ProductCategoryService>,
}

impl AppServices {
    /// Build the service container on top of a shared connection pool.
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        let departments = Arc::new(DepartmentService::new(db_pool.clone()));
        let products = Arc::new(ProductService::new(db_pool.clone()));
        let product_categories = Arc::new(ProductCategoryService::new(db_pool));

        Self {
            departments,
            products,
            product_categories,
        }
    }
}
