use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Work phase within a department. Phase codes are unique per department,
/// not globally.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "work_phases")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub department_id: i32,

    pub code: String,

    pub name: String,

    pub display_order: Option<i32>,

    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::Id"
    )]
    Department,
    #[sea_orm(has_many = "super::order_phase_value::Entity")]
    OrderPhaseValues,
    #[sea_orm(has_many = "super::production_task::Entity")]
    ProductionTasks,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::order_phase_value::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderPhaseValues.def()
    }
}

impl Related<super::production_task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductionTasks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
