use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Planning bucket for one (week, year) pair, unique per pair.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "weekly_plans")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub week_number: i32,

    pub year: i32,

    pub num_workers: Option<i32>,

    pub work_days_per_week: i32,

    pub hours_per_day: Decimal,

    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Model {
    /// Planned capacity for the week: workers x work days x hours per day.
    /// None until the number of workers has been set.
    pub fn total_planned_hours(&self) -> Option<Decimal> {
        self.num_workers.map(|workers| {
            Decimal::from(workers) * Decimal::from(self.work_days_per_week) * self.hours_per_day
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::weekly_plan_item::Entity")]
    PlanItems,
}

impl Related<super::weekly_plan_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
