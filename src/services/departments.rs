use std::collections::HashMap;
use std::sync::Arc;

use sea_orm::sea_query::{Expr, Func, NullOrdering};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, ModelTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select, Set, TransactionTrait,
};
use tracing::{debug, error, info, instrument};

use crate::{
    db::DbPool,
    entities::{
        department::{self, Entity as Department},
        production_order, work_phase,
    },
    errors::ServiceError,
    services::ResourceStats,
};

/// Input for creating a department.
#[derive(Debug, Clone)]
pub struct CreateDepartmentInput {
    pub code: String,
    pub name: String,
    pub display_order: Option<i32>,
    pub color: Option<String>,
    pub is_active: bool,
}

/// Partial update: only fields that are `Some` are applied.
#[derive(Debug, Clone, Default)]
pub struct UpdateDepartmentInput {
    pub code: Option<String>,
    pub name: Option<String>,
    pub display_order: Option<i32>,
    pub color: Option<String>,
    pub is_active: Option<bool>,
}

/// Department together with its activity counters.
#[derive(Debug, Clone)]
pub struct DepartmentWithStats {
    pub department: department::Model,
    pub work_phase_count: u64,
    pub active_orders_count: u64,
}

/// Service for managing factory departments
pub struct DepartmentService {
    db_pool: Arc<DbPool>,
}

/// Shared ordering for department listings: explicit display order first
/// (departments without one last), then name.
fn ordered(query: Select<Department>) -> Select<Department> {
    query
        .order_by_with_nulls(
            department::Column::DisplayOrder,
            Order::Asc,
            NullOrdering::Last,
        )
        .order_by_asc(department::Column::Name)
}

fn search_condition(term: &str) -> Condition {
    let pattern = format!("%{}%", term.to_lowercase());
    Condition::any()
        .add(
            Expr::expr(Func::lower(Expr::col((
                department::Entity,
                department::Column::Code,
            ))))
            .like(pattern.clone()),
        )
        .add(
            Expr::expr(Func::lower(Expr::col((
                department::Entity,
                department::Column::Name,
            ))))
            .like(pattern),
        )
}

impl DepartmentService {
    /// Creates a new department service instance
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Get a department by ID
    #[instrument(skip(self))]
    pub async fn get_department(
        &self,
        id: i32,
    ) -> Result<Option<department::Model>, ServiceError> {
        let db = &*self.db_pool;

        let department = Department::find_by_id(id).one(db).await.map_err(|e| {
            error!(department_id = id, error = %e, "Database error when fetching department");
            ServiceError::DatabaseError(e)
        })?;

        Ok(department)
    }

    /// Get a department by its unique code
    #[instrument(skip(self))]
    pub async fn get_department_by_code(
        &self,
        code: &str,
    ) -> Result<Option<department::Model>, ServiceError> {
        let db = &*self.db_pool;

        let department = Department::find()
            .filter(department::Column::Code.eq(code))
            .one(db)
            .await
            .map_err(|e| {
                error!(code = %code, error = %e, "Database error when fetching department by code");
                ServiceError::DatabaseError(e)
            })?;

        Ok(department)
    }

    /// List departments with offset pagination and optional filters.
    ///
    /// `search` matches code or name case-insensitively; the returned total
    /// is counted before pagination is applied.
    #[instrument(skip(self))]
    pub async fn list_departments(
        &self,
        skip: u64,
        limit: u64,
        search: Option<String>,
        is_active: Option<bool>,
    ) -> Result<(Vec<department::Model>, u64), ServiceError> {
        let db = &*self.db_pool;

        let mut query = Department::find();

        if let Some(term) = search.as_deref() {
            query = query.filter(search_condition(term));
        }

        if let Some(is_active) = is_active {
            query = query.filter(department::Column::IsActive.eq(is_active));
        }

        let total = query.clone().count(db).await.map_err(|e| {
            error!(error = %e, "Database error when counting departments");
            ServiceError::DatabaseError(e)
        })?;

        let departments = ordered(query)
            .offset(skip)
            .limit(limit)
            .all(db)
            .await
            .map_err(|e| {
                error!(skip, limit, error = %e, "Database error when listing departments");
                ServiceError::DatabaseError(e)
            })?;

        Ok((departments, total))
    }

    /// All active departments in display order, unpaginated. Used for
    /// selection lists and navigation.
    #[instrument(skip(self))]
    pub async fn list_active_ordered(&self) -> Result<Vec<department::Model>, ServiceError> {
        let db = &*self.db_pool;

        let departments = ordered(Department::find())
            .filter(department::Column::IsActive.eq(true))
            .all(db)
            .await
            .map_err(|e| {
                error!(error = %e, "Database error when listing active departments");
                ServiceError::DatabaseError(e)
            })?;

        Ok(departments)
    }

    /// Create a new department. Fails with a Conflict when the code is
    /// already taken.
    #[instrument(skip(self, input), fields(code = %input.code))]
    pub async fn create_department(
        &self,
        input: CreateDepartmentInput,
    ) -> Result<department::Model, ServiceError> {
        let db = &*self.db_pool;

        if self.get_department_by_code(&input.code).await?.is_some() {
            let msg = format!("Department code '{}' is already in use", input.code);
            return Err(ServiceError::Conflict(msg));
        }

        let department = department::ActiveModel {
            code: Set(input.code.clone()),
            name: Set(input.name),
            display_order: Set(input.display_order),
            color: Set(input.color),
            is_active: Set(input.is_active),
            ..Default::default()
        };

        let created = department.insert(db).await.map_err(|e| {
            error!(code = %input.code, error = %e, "Database error when creating department");
            ServiceError::DatabaseError(e)
        })?;

        info!(department_id = created.id, code = %created.code, "Department created");

        Ok(created)
    }

    /// Apply a partial update. Changing the code to one held by another
    /// department fails with a Conflict.
    #[instrument(skip(self, input))]
    pub async fn update_department(
        &self,
        id: i32,
        input: UpdateDepartmentInput,
    ) -> Result<department::Model, ServiceError> {
        let db = &*self.db_pool;

        let department = self
            .get_department(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Department with ID {} not found", id)))?;

        if let Some(new_code) = input.code.as_deref() {
            if new_code != department.code
                && self.get_department_by_code(new_code).await?.is_some()
            {
                let msg = format!("Department code '{}' is already in use", new_code);
                return Err(ServiceError::Conflict(msg));
            }
        }

        let mut active: department::ActiveModel = department.clone().into();

        if let Some(code) = input.code {
            active.code = Set(code);
        }
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(display_order) = input.display_order {
            active.display_order = Set(Some(display_order));
        }
        if let Some(color) = input.color {
            active.color = Set(Some(color));
        }
        if let Some(is_active) = input.is_active {
            active.is_active = Set(is_active);
        }

        if !active.is_changed() {
            return Ok(department);
        }

        let updated = active.update(db).await.map_err(|e| {
            error!(department_id = id, error = %e, "Database error when updating department");
            ServiceError::DatabaseError(e)
        })?;

        info!(department_id = updated.id, "Department updated");

        Ok(updated)
    }

    /// Hard-delete a department. Owned work phases go with it.
    #[instrument(skip(self))]
    pub async fn delete_department(&self, id: i32) -> Result<department::Model, ServiceError> {
        let db = &*self.db_pool;

        let department = self
            .get_department(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Department with ID {} not found", id)))?;

        let deleted = department.clone();
        department.delete(db).await.map_err(|e| {
            error!(department_id = id, error = %e, "Database error when deleting department");
            ServiceError::DatabaseError(e)
        })?;

        info!(department_id = id, "Department deleted");

        Ok(deleted)
    }

    /// Soft-delete: clears the active flag, leaving everything else intact.
    #[instrument(skip(self))]
    pub async fn deactivate_department(&self, id: i32) -> Result<department::Model, ServiceError> {
        self.set_active(id, false).await
    }

    /// Re-activate a previously deactivated department.
    #[instrument(skip(self))]
    pub async fn activate_department(&self, id: i32) -> Result<department::Model, ServiceError> {
        self.set_active(id, true).await
    }

    async fn set_active(
        &self,
        id: i32,
        is_active: bool,
    ) -> Result<department::Model, ServiceError> {
        let db = &*self.db_pool;

        let department = self
            .get_department(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Department with ID {} not found", id)))?;

        let mut active: department::ActiveModel = department.into();
        active.is_active = Set(is_active);

        let updated = active.update(db).await.map_err(|e| {
            error!(department_id = id, is_active, error = %e, "Database error when toggling department");
            ServiceError::DatabaseError(e)
        })?;

        info!(department_id = id, is_active, "Department active flag set");

        Ok(updated)
    }

    /// Department plus the number of owned work phases and the number of
    /// production orders currently queued at it.
    #[instrument(skip(self))]
    pub async fn get_department_with_stats(
        &self,
        id: i32,
    ) -> Result<Option<DepartmentWithStats>, ServiceError> {
        let db = &*self.db_pool;

        let Some(department) = self.get_department(id).await? else {
            return Ok(None);
        };

        let work_phase_count = work_phase::Entity::find()
            .filter(work_phase::Column::DepartmentId.eq(id))
            .count(db)
            .await
            .map_err(|e| {
                error!(department_id = id, error = %e, "Database error when counting work phases");
                ServiceError::DatabaseError(e)
            })?;

        let active_orders_count = production_order::Entity::find()
            .filter(production_order::Column::CurrentDepartmentId.eq(id))
            .count(db)
            .await
            .map_err(|e| {
                error!(department_id = id, error = %e, "Database error when counting orders");
                ServiceError::DatabaseError(e)
            })?;

        Ok(Some(DepartmentWithStats {
            department,
            work_phase_count,
            active_orders_count,
        }))
    }

    /// Bulk-update display orders from an id -> new order mapping.
    ///
    /// Ids that do not exist are skipped without error; the returned list
    /// contains only the departments that were actually updated. The whole
    /// batch runs in one transaction.
    #[instrument(skip(self, mapping), fields(count = mapping.len()))]
    pub async fn reorder_departments(
        &self,
        mapping: HashMap<i32, i32>,
    ) -> Result<Vec<department::Model>, ServiceError> {
        let db = &*self.db_pool;

        let txn = db.begin().await.map_err(|e| {
            error!(error = %e, "Failed to open transaction for reorder");
            ServiceError::DatabaseError(e)
        })?;

        let mut entries: Vec<(i32, i32)> = mapping.into_iter().collect();
        entries.sort_unstable_by_key(|(id, _)| *id);

        let mut updated = Vec::with_capacity(entries.len());
        for (id, new_order) in entries {
            let found = Department::find_by_id(id).one(&txn).await.map_err(|e| {
                error!(department_id = id, error = %e, "Database error during reorder");
                ServiceError::DatabaseError(e)
            })?;

            let Some(department) = found else {
                debug!(department_id = id, "Skipping unknown department id in reorder");
                continue;
            };

            let mut active: department::ActiveModel = department.into();
            active.display_order = Set(Some(new_order));
            let model = active.update(&txn).await.map_err(|e| {
                error!(department_id = id, error = %e, "Database error during reorder update");
                ServiceError::DatabaseError(e)
            })?;
            updated.push(model);
        }

        txn.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit reorder transaction");
            ServiceError::DatabaseError(e)
        })?;

        info!(updated = updated.len(), "Departments reordered");

        Ok(updated)
    }

    /// Total / active / inactive department counts.
    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<ResourceStats, ServiceError> {
        let db = &*self.db_pool;

        let total = Department::find().count(db).await.map_err(|e| {
            error!(error = %e, "Database error when counting departments");
            ServiceError::DatabaseError(e)
        })?;

        let active = Department::find()
            .filter(department::Column::IsActive.eq(true))
            .count(db)
            .await
            .map_err(|e| {
                error!(error = %e, "Database error when counting active departments");
                ServiceError::DatabaseError(e)
            })?;

        Ok(ResourceStats {
            total,
            active,
            inactive: total - active,
        })
    }
}
