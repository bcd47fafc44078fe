use sea_orm_migration::prelude::*;

use crate::m20250601_000004_create_production_orders_table::ProductionOrders;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250601_000007_create_planning_tables"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WeeklyPlans::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WeeklyPlans::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WeeklyPlans::WeekNumber).integer().not_null())
                    .col(ColumnDef::new(WeeklyPlans::Year).integer().not_null())
                    .col(ColumnDef::new(WeeklyPlans::NumWorkers).integer().null())
                    .col(
                        ColumnDef::new(WeeklyPlans::WorkDaysPerWeek)
                            .integer()
                            .not_null()
                            .default(5),
                    )
                    .col(
                        ColumnDef::new(WeeklyPlans::HoursPerDay)
                            .decimal_len(4, 2)
                            .not_null()
                            .default(7.5),
                    )
                    .col(ColumnDef::new(WeeklyPlans::Notes).text().null())
                    .col(
                        ColumnDef::new(WeeklyPlans::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(WeeklyPlans::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_weekly_plan")
                    .table(WeeklyPlans::Table)
                    .col(WeeklyPlans::WeekNumber)
                    .col(WeeklyPlans::Year)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(WeeklyPlanItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WeeklyPlanItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(WeeklyPlanItems::WeeklyPlanId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WeeklyPlanItems::ProductionOrderId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WeeklyPlanItems::PlannedSequence)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(WeeklyPlanItems::EstimatedHours)
                            .decimal_len(10, 2)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(WeeklyPlanItems::Priority)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_weekly_plan_items_plan")
                            .from(WeeklyPlanItems::Table, WeeklyPlanItems::WeeklyPlanId)
                            .to(WeeklyPlans::Table, WeeklyPlans::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_weekly_plan_items_order")
                            .from(WeeklyPlanItems::Table, WeeklyPlanItems::ProductionOrderId)
                            .to(ProductionOrders::Table, ProductionOrders::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_plan_order")
                    .table(WeeklyPlanItems::Table)
                    .col(WeeklyPlanItems::WeeklyPlanId)
                    .col(WeeklyPlanItems::ProductionOrderId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WeeklyPlanItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WeeklyPlans::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WeeklyPlans {
    Table,
    Id,
    WeekNumber,
    Year,
    NumWorkers,
    WorkDaysPerWeek,
    HoursPerDay,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum WeeklyPlanItems {
    Table,
    Id,
    WeeklyPlanId,
    ProductionOrderId,
    PlannedSequence,
    EstimatedHours,
    Priority,
}
