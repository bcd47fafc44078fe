use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum EfficiencyPeriodType {
    #[sea_orm(string_value = "DAILY")]
    Daily,
    #[sea_orm(string_value = "WEEKLY")]
    Weekly,
    #[sea_orm(string_value = "MONTHLY")]
    Monthly,
}

/// Aggregated planned-vs-actual work hours for a department and period.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "efficiency_summaries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub period_type: EfficiencyPeriodType,

    pub department_id: Option<i32>,

    /// Set for DAILY periods
    pub date: Option<Date>,

    /// Set for WEEKLY periods
    pub week_number: Option<i32>,

    /// Set for MONTHLY periods
    pub month: Option<i32>,

    pub year: i32,

    pub planned_work_hours: Decimal,

    pub actual_work_hours: Option<Decimal>,

    pub total_std_time: Decimal,

    pub total_target_time: Decimal,

    /// Realized efficiency percentage
    pub efficiency_actual: Option<Decimal>,

    /// Target efficiency percentage
    pub efficiency_target: Option<Decimal>,

    pub num_workers: Option<i32>,

    pub num_work_days: Option<i32>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::Id"
    )]
    Department,
    #[sea_orm(has_many = "super::efficiency_item::Entity")]
    Items,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::efficiency_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
