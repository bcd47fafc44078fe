use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Production order for a quantity of one product, queued at a department.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "production_orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Unique order number from the ERP export
    pub order_number: String,

    /// Customer or ERP reference, not unique
    pub reference_number: Option<String>,

    pub product_id: Option<i32>,

    pub quantity: i32,

    pub ship_date: Option<Date>,

    /// ISO week the order is planned for
    pub week_number: Option<i32>,

    pub year: Option<i32>,

    /// Department the order is currently queued at
    pub current_department_id: Option<i32>,

    pub queue_position: i32,

    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::CurrentDepartmentId",
        to = "super::department::Column::Id"
    )]
    CurrentDepartment,
    #[sea_orm(has_many = "super::order_department_status::Entity")]
    DepartmentStatuses,
    #[sea_orm(has_many = "super::order_phase_value::Entity")]
    PhaseValues,
    #[sea_orm(has_many = "super::production_task::Entity")]
    ProductionTasks,
    #[sea_orm(has_many = "super::weekly_plan_item::Entity")]
    WeeklyPlanItems,
    #[sea_orm(has_many = "super::efficiency_item::Entity")]
    EfficiencyItems,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CurrentDepartment.def()
    }
}

impl Related<super::order_department_status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DepartmentStatuses.def()
    }
}

impl Related<super::order_phase_value::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PhaseValues.def()
    }
}

impl Related<super::production_task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductionTasks.def()
    }
}

impl Related<super::weekly_plan_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WeeklyPlanItems.def()
    }
}

impl Related<super::efficiency_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EfficiencyItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
