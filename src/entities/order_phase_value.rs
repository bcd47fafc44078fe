use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Free-text value recorded for one work phase of one production order,
/// unique per (order, phase).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_phase_values")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub production_order_id: i32,

    pub work_phase_id: i32,

    pub value: Option<String>,
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

impl Related<super::work_phase::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkPhase.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
