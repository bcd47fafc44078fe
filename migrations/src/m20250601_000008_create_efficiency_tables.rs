use sea_orm_migration::prelude::*;

use crate::m20250601_000001_create_departments_table::Departments;
use crate::m20250601_000004_create_production_orders_table::ProductionOrders;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250601_000008_create_efficiency_tables"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EfficiencySummaries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EfficiencySummaries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EfficiencySummaries::PeriodType)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EfficiencySummaries::DepartmentId)
                            .integer()
                            .null(),
                    )
                    .col(ColumnDef::new(EfficiencySummaries::Date).date().null())
                    .col(
                        ColumnDef::new(EfficiencySummaries::WeekNumber)
                            .integer()
                            .null(),
                    )
                    .col(ColumnDef::new(EfficiencySummaries::Month).integer().null())
                    .col(ColumnDef::new(EfficiencySummaries::Year).integer().not_null())
                    .col(
                        ColumnDef::new(EfficiencySummaries::PlannedWorkHours)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EfficiencySummaries::ActualWorkHours)
                            .decimal_len(10, 2)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(EfficiencySummaries::TotalStdTime)
                            .decimal_len(10, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(EfficiencySummaries::TotalTargetTime)
                            .decimal_len(10, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(EfficiencySummaries::EfficiencyActual)
                            .decimal_len(5, 2)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(EfficiencySummaries::EfficiencyTarget)
                            .decimal_len(5, 2)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(EfficiencySummaries::NumWorkers)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(EfficiencySummaries::NumWorkDays)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(EfficiencySummaries::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(EfficiencySummaries::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_efficiency_summaries_department")
                            .from(
                                EfficiencySummaries::Table,
                                EfficiencySummaries::DepartmentId,
                            )
                            .to(Departments::Table, Departments::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_efficiency_summaries_year_week")
                    .table(EfficiencySummaries::Table)
                    .col(EfficiencySummaries::Year)
                    .col(EfficiencySummaries::WeekNumber)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EfficiencyItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EfficiencyItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EfficiencyItems::EfficiencySummaryId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EfficiencyItems::ProductionOrderId)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(EfficiencyItems::QuantityCompleted)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(EfficiencyItems::QuantityTarget)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(EfficiencyItems::StandardTimeMinutes)
                            .decimal_len(10, 2)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(EfficiencyItems::ActualStdTime)
                            .decimal_len(10, 2)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(EfficiencyItems::TargetStdTime)
                            .decimal_len(10, 2)
                            .null(),
                    )
                    .col(ColumnDef::new(EfficiencyItems::Status).string_len(50).null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_efficiency_items_summary")
                            .from(EfficiencyItems::Table, EfficiencyItems::EfficiencySummaryId)
                            .to(EfficiencySummaries::Table, EfficiencySummaries::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_efficiency_items_order")
                            .from(EfficiencyItems::Table, EfficiencyItems::ProductionOrderId)
                            .to(ProductionOrders::Table, ProductionOrders::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EfficiencyItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EfficiencySummaries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EfficiencySummaries {
    Table,
    Id,
    PeriodType,
    DepartmentId,
    Date,
    WeekNumber,
    Month,
    Year,
    PlannedWorkHours,
    ActualWorkHours,
    TotalStdTime,
    TotalTargetTime,
    EfficiencyActual,
    EfficiencyTarget,
    NumWorkers,
    NumWorkDays,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum EfficiencyItems {
    Table,
    Id,
    EfficiencySummaryId,
    ProductionOrderId,
    QuantityCompleted,
    QuantityTarget,
    StandardTimeMinutes,
    ActualStdTime,
    TargetStdTime,
    Status,
}
