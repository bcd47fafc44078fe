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
    entities::product_category::{self, Entity as ProductCategory},
    errors::ServiceError,
};

#[derive(Debug, Clone)]
pub struct CreateProductCategoryInput {
    pub code: String,
    pub name: Option<String>,
    pub efficiency_multiplier: Decimal,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProductCategoryInput {
    pub code: Option<String>,
    pub name: Option<String>,
    pub efficiency_multiplier: Option<Decimal>,
}

/// Service for managing product categories. Categories have no soft-delete
/// concept; they are plain reference data.
pub struct ProductCategoryService {
    db_pool: Arc<DbPool>,
}

impl ProductCategoryService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Get a category by ID
    #[instrument(skip(self))]
    pub async fn get_category(
        &self,
        id: i32,
    ) -> Result<Option<product_category::Model>, ServiceError> {
        let db = &*self.db_pool;

        let category = ProductCategory::find_by_id(id).one(db).await.map_err(|e| {
            error!(category_id = id, error = %e, "Database error when fetching category");
            ServiceError::DatabaseError(e)
        })?;

        Ok(category)
    }

    /// Get a category by its unique code
    #[instrument(skip(self))]
    pub async fn get_category_by_code(
        &self,
        code: &str,
    ) -> Result<Option<product_category::Model>, ServiceError> {
        let db = &*self.db_pool;

        let category = ProductCategory::find()
            .filter(product_category::Column::Code.eq(code))
            .one(db)
            .await
            .map_err(|e| {
                error!(code = %code, error = %e, "Database error when fetching category by code");
                ServiceError::DatabaseError(e)
            })?;

        Ok(category)
    }

    /// List categories ordered by code, with optional code/name search.
    #[instrument(skip(self))]
    pub async fn list_categories(
        &self,
        skip: u64,
        limit: u64,
        search: Option<String>,
    ) -> Result<(Vec<product_category::Model>, u64), ServiceError> {
        let db = &*self.db_pool;

        let mut query = ProductCategory::find();

        if let Some(term) = search.as_deref() {
            let pattern = format!("%{}%", term.to_lowercase());
            query = query.filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col((
                            product_category::Entity,
                            product_category::Column::Code,
                        ))))
                        .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col((
                            product_category::Entity,
                            product_category::Column::Name,
                        ))))
                        .like(pattern),
                    ),
            );
        }

        let total = query.clone().count(db).await.map_err(|e| {
            error!(error = %e, "Database error when counting categories");
            ServiceError::DatabaseError(e)
        })?;

        let categories = query
            .order_by_asc(product_category::Column::Code)
            .offset(skip)
            .limit(limit)
            .all(db)
            .await
            .map_err(|e| {
                error!(skip, limit, error = %e, "Database error when listing categories");
                ServiceError::DatabaseError(e)
            })?;

        Ok((categories, total))
    }

    /// Create a new category. Fails with a Conflict when the code is taken.
    #[instrument(skip(self, input), fields(code = %input.code))]
    pub async fn create_category(
        &self,
        input: CreateProductCategoryInput,
    ) -> Result<product_category::Model, ServiceError> {
        let db = &*self.db_pool;

        if self.get_category_by_code(&input.code).await?.is_some() {
            let msg = format!("Category code '{}' is already in use", input.code);
            return Err(ServiceError::Conflict(msg));
        }

        let category = product_category::ActiveModel {
            code: Set(input.code.clone()),
            name: Set(input.name),
            efficiency_multiplier: Set(input.efficiency_multiplier),
            ..Default::default()
        };

        let created = category.insert(db).await.map_err(|e| {
            error!(code = %input.code, error = %e, "Database error when creating category");
            ServiceError::DatabaseError(e)
        })?;

        info!(category_id = created.id, code = %created.code, "Category created");

        Ok(created)
    }

    /// Apply a partial update. Changing the code to one held by another
    /// category fails with a Conflict.
    #[instrument(skip(self, input))]
    pub async fn update_category(
        &self,
        id: i32,
        input: UpdateProductCategoryInput,
    ) -> Result<product_category::Model, ServiceError> {
        let db = &*self.db_pool;

        let category = self
            .get_category(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Category with ID {} not found", id)))?;

        if let Some(new_code) = input.code.as_deref() {
            if new_code != category.code && self.get_category_by_code(new_code).await?.is_some() {
                let msg = format!("Category code '{}' is already in use", new_code);
                return Err(ServiceError::Conflict(msg));
            }
        }

        let mut active: product_category::ActiveModel = category.clone().into();

        if let Some(code) = input.code {
            active.code = Set(code);
        }
        if let Some(name) = input.name {
            active.name = Set(Some(name));
        }
        if let Some(efficiency_multiplier) = input.efficiency_multiplier {
            active.efficiency_multiplier = Set(efficiency_multiplier);
        }

        if !active.is_changed() {
            return Ok(category);
        }

        let updated = active.update(db).await.map_err(|e| {
            error!(category_id = id, error = %e, "Database error when updating category");
            ServiceError::DatabaseError(e)
        })?;

        info!(category_id = updated.id, "Category updated");

        Ok(updated)
    }

    /// Hard-delete a category.
    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: i32) -> Result<product_category::Model, ServiceError> {
        let db = &*self.db_pool;

        let category = self
            .get_category(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Category with ID {} not found", id)))?;

        let deleted = category.clone();
        category.delete(db).await.map_err(|e| {
            error!(category_id = id, error = %e, "Database error when deleting category");
            ServiceError::DatabaseError(e)
        })?;

        info!(category_id = id, "Category deleted");

        Ok(deleted)
    }
}
