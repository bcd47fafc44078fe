use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One logged unit of work: an employee working on an order in a department
/// phase between two timestamps. Tasks logged together share a batch uuid.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "production_tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub task_uuid: Uuid,

    pub production_order_id: i32,

    pub employee_id: Option<i32>,

    pub department_id: Option<i32>,

    pub work_phase_id: Option<i32>,

    /// Groups tasks that were logged in one submission
    pub batch_uuid: Option<Uuid>,

    pub started_at: DateTime<Utc>,

    pub ended_at: Option<DateTime<Utc>>,

    pub quantity_completed: Decimal,

    pub comment: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl Model {
    /// Task duration in whole minutes, once the task has ended.
    pub fn duration_minutes(&self) -> Option<i64> {
        self.ended_at
            .map(|ended| (ended - self.started_at).num_minutes())
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::production_order::Entity",
        from = "Column::ProductionOrderId",
        to = "super::production_order::Column::Id"
    )]
    ProductionOrder,
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id"
    )]
    Employee,
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::Id"
    )]
    Department,
    #[sea_orm(
        belongs_to = "super::work_phase::Entity",
        from = "Column::WorkPhaseId",
        to = "super::work_phase::Column::Id"
    )]
    WorkPhase,
}

impl Related<super::production_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductionOrder.def()
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::work_phase::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkPhase.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
