use std::sync::Arc;

use rust_decimal::Decimal;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use tracing::{error, info, instrument};

use crate::{
    db::DbPool,
    entities::{
        product::{self, Entity as Product},
        product_category::{self, Entity as ProductCategory},
    },
    errors::ServiceError,
    services::ResourceStats,
};

/// Product with its category resolved, as returned by every read operation.
pub type ProductWithCategory = (product::Model, Option<product_category::Model>);

/// Input for creating a product.
#[derive(Debug, Clone)]
pub struct CreateProductInput {
    pub item_number: String,
    pub description: Option<String>,
    pub category_code: Option<String>,
    pub standard_time_minutes: Option<Decimal>,
    pub is_active: bool,
}

/// Partial update: only fields that are `Some` are applied.
#[derive(Debug, Clone, Default)]
pub struct UpdateProductInput {
    pub item_number: Option<String>,
    pub description: Option<String>,
    pub category_code: Option<String>,
    pub standard_time_minutes: Option<Decimal>,
    pub is_active: Option<bool>,
}

/// Service for managing products
pub struct ProductService {
    db_pool: Arc<DbPool>,
}

fn search_condition(term: &str) -> Condition {
    let pattern = format!("%{}%", term.to_lowercase());
    Condition::any()
        .add(
            Expr::expr(Func::lower(Expr::col((
                product::Entity,
                product::Column::ItemNumber,
            ))))
            .like(pattern.clone()),
        )
        .add(
            Expr::expr(Func::lower(Expr::col((
                product::Entity,
                product::Column::Description,
            ))))
            .like(pattern),
        )
}

impl ProductService {
    /// Creates a new product service instance
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Get a product by ID, with its category resolved
    #[instrument(skip(self))]
    pub async fn get_product(
        &self,
        id: i32,
    ) -> Result<Option<ProductWithCategory>, ServiceError> {
        let db = &*self.db_pool;

        let product = Product::find_by_id(id)
            .find_also_related(ProductCategory)
            .one(db)
            .await
            .map_err(|e| {
                error!(product_id = id, error = %e, "Database error when fetching product");
                ServiceError::DatabaseError(e)
            })?;

        Ok(product)
    }

    /// Get a product by its unique item number
    #[instrument(skip(self))]
    pub async fn get_product_by_item_number(
        &self,
        item_number: &str,
    ) -> Result<Option<ProductWithCategory>, ServiceError> {
        let db = &*self.db_pool;

        let product = Product::find()
            .filter(product::Column::ItemNumber.eq(item_number))
            .find_also_related(ProductCategory)
            .one(db)
            .await
            .map_err(|e| {
                error!(item_number = %item_number, error = %e, "Database error when fetching product by number");
                ServiceError::DatabaseError(e)
            })?;

        Ok(product)
    }

    /// List products with offset pagination and optional filters.
    ///
    /// `search` matches item number or description case-insensitively;
    /// `category_code` is an exact match. Ordered by item number. The total
    /// is counted before pagination.
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        skip: u64,
        limit: u64,
        search: Option<String>,
        category_code: Option<String>,
        is_active: Option<bool>,
    ) -> Result<(Vec<ProductWithCategory>, u64), ServiceError> {
        let db = &*self.db_pool;

        let mut query = Product::find();

        if let Some(term) = search.as_deref() {
            query = query.filter(search_condition(term));
        }

        if let Some(code) = category_code.as_deref() {
            query = query.filter(product::Column::CategoryCode.eq(code));
        }

        if let Some(is_active) = is_active {
            query = query.filter(product::Column::IsActive.eq(is_active));
        }

        let total = query.clone().count(db).await.map_err(|e| {
            error!(error = %e, "Database error when counting products");
            ServiceError::DatabaseError(e)
        })?;

        let products = query
            .find_also_related(ProductCategory)
            .order_by_asc(product::Column::ItemNumber)
            .offset(skip)
            .limit(limit)
            .all(db)
            .await
            .map_err(|e| {
                error!(skip, limit, error = %e, "Database error when listing products");
                ServiceError::DatabaseError(e)
            })?;

        Ok((products, total))
    }

    /// Active products ordered by item number, for selection lists.
    #[instrument(skip(self))]
    pub async fn list_active(
        &self,
        limit: u64,
    ) -> Result<Vec<ProductWithCategory>, ServiceError> {
        let (products, _) = self.list_products(0, limit, None, None, Some(true)).await?;
        Ok(products)
    }

    /// Autocomplete search: case-insensitive **prefix** match on the item
    /// number, active products only. "ABC" finds "ABC-001" but not
    /// "XABC-003".
    #[instrument(skip(self))]
    pub async fn search_by_number(
        &self,
        search_term: &str,
        limit: u64,
    ) -> Result<Vec<ProductWithCategory>, ServiceError> {
        let db = &*self.db_pool;

        let pattern = format!("{}%", search_term.to_lowercase());
        let products = Product::find()
            .filter(
                Expr::expr(Func::lower(Expr::col((
                    product::Entity,
                    product::Column::ItemNumber,
                ))))
                .like(pattern),
            )
            .filter(product::Column::IsActive.eq(true))
            .find_also_related(ProductCategory)
            .order_by_asc(product::Column::ItemNumber)
            .limit(limit)
            .all(db)
            .await
            .map_err(|e| {
                error!(search_term = %search_term, error = %e, "Database error during product search");
                ServiceError::DatabaseError(e)
            })?;

        Ok(products)
    }

    /// Create a new product.
    ///
    /// Fails with a Conflict when the item number is taken or a supplied
    /// category code does not reference an existing category.
    #[instrument(skip(self, input), fields(item_number = %input.item_number))]
    pub async fn create_product(
        &self,
        input: CreateProductInput,
    ) -> Result<ProductWithCategory, ServiceError> {
        let db = &*self.db_pool;

        if self
            .get_product_by_item_number(&input.item_number)
            .await?
            .is_some()
        {
            let msg = format!("Item number '{}' is already in use", input.item_number);
            return Err(ServiceError::Conflict(msg));
        }

        let category = self.resolve_category(input.category_code.as_deref()).await?;

        let product = product::ActiveModel {
            item_number: Set(input.item_number.clone()),
            description: Set(input.description),
            category_code: Set(input.category_code),
            standard_time_minutes: Set(input.standard_time_minutes),
            is_active: Set(input.is_active),
            ..Default::default()
        };

        let created = product.insert(db).await.map_err(|e| {
            error!(item_number = %input.item_number, error = %e, "Database error when creating product");
            ServiceError::DatabaseError(e)
        })?;

        info!(product_id = created.id, item_number = %created.item_number, "Product created");

        Ok((created, category))
    }

    /// Apply a partial update with the same uniqueness and category
    /// preconditions as create.
    #[instrument(skip(self, input))]
    pub async fn update_product(
        &self,
        id: i32,
        input: UpdateProductInput,
    ) -> Result<ProductWithCategory, ServiceError> {
        let db = &*self.db_pool;

        let (product, current_category) = self
            .get_product(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Product with ID {} not found", id)))?;

        if let Some(new_number) = input.item_number.as_deref() {
            if new_number != product.item_number
                && self.get_product_by_item_number(new_number).await?.is_some()
            {
                let msg = format!("Item number '{}' is already in use", new_number);
                return Err(ServiceError::Conflict(msg));
            }
        }

        let category = match input.category_code.as_deref() {
            Some(code) => self.resolve_category(Some(code)).await?,
            None => current_category,
        };

        let mut active: product::ActiveModel = product.clone().into();

        if let Some(item_number) = input.item_number {
            active.item_number = Set(item_number);
        }
        if let Some(description) = input.description {
            active.description = Set(Some(description));
        }
        if let Some(category_code) = input.category_code {
            active.category_code = Set(Some(category_code));
        }
        if let Some(standard_time_minutes) = input.standard_time_minutes {
            active.standard_time_minutes = Set(Some(standard_time_minutes));
        }
        if let Some(is_active) = input.is_active {
            active.is_active = Set(is_active);
        }

        if !active.is_changed() {
            return Ok((product, category));
        }

        let updated = active.update(db).await.map_err(|e| {
            error!(product_id = id, error = %e, "Database error when updating product");
            ServiceError::DatabaseError(e)
        })?;

        info!(product_id = updated.id, "Product updated");

        Ok((updated, category))
    }

    /// Hard-delete a product. BOM lines go with it; prefer deactivation.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> Result<product::Model, ServiceError> {
        let db = &*self.db_pool;

        let (product, _) = self
            .get_product(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Product with ID {} not found", id)))?;

        let deleted = product.clone();
        product.delete(db).await.map_err(|e| {
            error!(product_id = id, error = %e, "Database error when deleting product");
            ServiceError::DatabaseError(e)
        })?;

        info!(product_id = id, "Product deleted");

        Ok(deleted)
    }

    /// Soft-delete: clears the active flag.
    #[instrument(skip(self))]
    pub async fn deactivate_product(&self, id: i32) -> Result<ProductWithCategory, ServiceError> {
        self.set_active(id, false).await
    }

    /// Re-activate a previously deactivated product.
    #[instrument(skip(self))]
    pub async fn activate_product(&self, id: i32) -> Result<ProductWithCategory, ServiceError> {
        self.set_active(id, true).await
    }

    async fn set_active(
        &self,
        id: i32,
        is_active: bool,
    ) -> Result<ProductWithCategory, ServiceError> {
        let db = &*self.db_pool;

        let (product, category) = self
            .get_product(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Product with ID {} not found", id)))?;

        let mut active: product::ActiveModel = product.into();
        active.is_active = Set(is_active);

        let updated = active.update(db).await.map_err(|e| {
            error!(product_id = id, is_active, error = %e, "Database error when toggling product");
            ServiceError::DatabaseError(e)
        })?;

        info!(product_id = id, is_active, "Product active flag set");

        Ok((updated, category))
    }

    /// Total / active / inactive product counts.
    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<ResourceStats, ServiceError> {
        let db = &*self.db_pool;

        let total = Product::find().count(db).await.map_err(|e| {
            error!(error = %e, "Database error when counting products");
            ServiceError::DatabaseError(e)
        })?;

        let active = Product::find()
            .filter(product::Column::IsActive.eq(true))
            .count(db)
            .await
            .map_err(|e| {
                error!(error = %e, "Database error when counting active products");
                ServiceError::DatabaseError(e)
            })?;

        Ok(ResourceStats {
            total,
            active,
            inactive: total - active,
        })
    }

    /// Look up a category by code when one is supplied; a missing category
    /// is a Conflict, same as a duplicate key.
    async fn resolve_category(
        &self,
        category_code: Option<&str>,
    ) -> Result<Option<product_category::Model>, ServiceError> {
        let Some(code) = category_code else {
            return Ok(None);
        };

        let db = &*self.db_pool;
        let category = ProductCategory::find()
            .filter(product_category::Column::Code.eq(code))
            .one(db)
            .await
            .map_err(|e| {
                error!(category_code = %code, error = %e, "Database error when resolving category");
                ServiceError::DatabaseError(e)
            })?;

        category
            .ok_or_else(|| {
                ServiceError::Conflict(format!("Category with code '{}' does not exist", code))
            })
            .map(Some)
    }
}
