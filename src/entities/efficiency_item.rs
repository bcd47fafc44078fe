use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-order line of an efficiency summary: completed vs target quantities
/// and the standard time they translate to.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "efficiency_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub efficiency_summary_id: i32,

    pub production_order_id: Option<i32>,

    pub quantity_completed: Option<i32>,

    pub quantity_target: Option<i32>,

    pub standard_time_minutes: Option<Decimal>,

    /// completed quantity x standard time
    pub actual_std_time: Option<Decimal>,

    /// target quantity x standard time
    pub target_std_time: Option<Decimal>,

    pub status: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::efficiency_summary::Entity",
        from = "Column::EfficiencySummaryId",
        to = "super::efficiency_summary::Column::Id"
    )]
    EfficiencySummary,
    #[sea_orm(
        belongs_to = "super::production_order::Entity",
        from = "Column::ProductionOrderId",
        to = "super::production_order::Column::Id"
    )]
    ProductionOrder,
}

impl Related<super::efficiency_summary::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EfficiencySummary.def()
    }
}

impl Related<super::production_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductionOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
