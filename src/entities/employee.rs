use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Factory employee who logs production tasks.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Unique badge number, e.g. "EMP001"
    pub employee_number: String,

    pub first_name: Option<String>,

    pub last_name: Option<String>,

    pub primary_department_id: Option<i32>,

    pub hire_date: Option<Date>,

    pub is_active: bool,

    pub created_at: DateTime<Utc>,
}

impl Model {
    /// Display name combining first and last name.
    pub fn full_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.to_string(),
            (None, Some(last)) => last.to_string(),
            (None, None) => self.employee_number.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::PrimaryDepartmentId",
        to = "super::department::Column::Id"
    )]
    PrimaryDepartment,
    #[sea_orm(has_many = "super::production_task::Entity")]
    ProductionTasks,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PrimaryDepartment.def()
    }
}

impl Related<super::production_task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductionTasks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
