use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Factory department (cutting, packing, printing, ...).
///
/// Departments own their work phases (deleted together with the department)
/// and are referenced by production orders as their current location.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "departments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Unique department code, e.g. "LEIKKAUS"
    pub code: String,

    pub name: String,

    /// Position in selection lists; departments without one sort last
    pub display_order: Option<i32>,

    /// Hex color used by the planning board, e.g. "#FF6B6B"
    pub color: Option<String>,

    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::work_phase::Entity")]
    WorkPhases,
    #[sea_orm(has_many = "super::order_department_status::Entity")]
    OrderStatuses,
    #[sea_orm(has_many = "super::production_task::Entity")]
    ProductionTasks,
    #[sea_orm(has_many = "super::efficiency_summary::Entity")]
    EfficiencySummaries,
}

impl Related<super::work_phase::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkPhases.def()
    }
}

impl Related<super::order_department_status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderStatuses.def()
    }
}

impl Related<super::production_task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductionTasks.def()
    }
}

impl Related<super::efficiency_summary::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EfficiencySummaries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
