use sea_orm_migration::prelude::*;

use crate::m20250601_000001_create_departments_table::Departments;
use crate::m20250601_000002_create_work_phases_table::WorkPhases;
use crate::m20250601_000004_create_production_orders_table::ProductionOrders;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250601_000005_create_order_tracking_tables"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderDepartmentStatus::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrderDepartmentStatus::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OrderDepartmentStatus::ProductionOrderId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OrderDepartmentStatus::DepartmentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OrderDepartmentStatus::Status)
                            .string_len(20)
                            .not_null()
                            .default("NOT_STARTED"),
                    )
                    .col(
                        ColumnDef::new(OrderDepartmentStatus::QuantityCompleted)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(OrderDepartmentStatus::StartedAt)
                            .timestamp()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(OrderDepartmentStatus::CompletedAt)
                            .timestamp()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_department_status_order")
                            .from(
                                OrderDepartmentStatus::Table,
                                OrderDepartmentStatus::ProductionOrderId,
                            )
                            .to(ProductionOrders::Table, ProductionOrders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_department_status_department")
                            .from(
                                OrderDepartmentStatus::Table,
                                OrderDepartmentStatus::DepartmentId,
                            )
                            .to(Departments::Table, Departments::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_order_department")
                    .table(OrderDepartmentStatus::Table)
                    .col(OrderDepartmentStatus::ProductionOrderId)
                    .col(OrderDepartmentStatus::DepartmentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OrderPhaseValues::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrderPhaseValues::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OrderPhaseValues::ProductionOrderId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OrderPhaseValues::WorkPhaseId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OrderPhaseValues::Value).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_phase_values_order")
                            .from(OrderPhaseValues::Table, OrderPhaseValues::ProductionOrderId)
                            .to(ProductionOrders::Table, ProductionOrders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_phase_values_work_phase")
                            .from(OrderPhaseValues::Table, OrderPhaseValues::WorkPhaseId)
                            .to(WorkPhases::Table, WorkPhases::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_order_phase")
                    .table(OrderPhaseValues::Table)
                    .col(OrderPhaseValues::ProductionOrderId)
                    .col(OrderPhaseValues::WorkPhaseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderPhaseValues::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OrderDepartmentStatus::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderDepartmentStatus {
    Table,
    Id,
    ProductionOrderId,
    DepartmentId,
    Status,
    QuantityCompleted,
    StartedAt,
    CompletedAt,
}

#[derive(DeriveIden)]
pub enum OrderPhaseValues {
    Table,
    Id,
    ProductionOrderId,
    WorkPhaseId,
    Value,
}
