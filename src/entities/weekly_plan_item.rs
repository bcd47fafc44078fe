use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Production order scheduled into a weekly plan, with sequence and
/// priority. An order appears at most once per plan.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "weekly_plan_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub weekly_plan_id: i32,

    pub production_order_id: i32,

    pub planned_sequence: Option<i32>,

    pub estimated_hours: Option<Decimal>,

    pub priority: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::weekly_plan::Entity",
        from = "Column::WeeklyPlanId",
        to = "super::weekly_plan::Column::Id"
    )]
    WeeklyPlan,
    #[sea_orm(
        belongs_to = "super::production_order::Entity",
        from = "Column::ProductionOrderId",
        to = "super::production_order::Column::Id"
    )]
    ProductionOrder,
}

impl Related<super::weekly_plan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WeeklyPlan.def()
    }
}

impl Related<super::production_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductionOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
