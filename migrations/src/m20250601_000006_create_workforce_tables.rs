use sea_orm_migration::prelude::*;

use crate::m20250601_000001_create_departments_table::Departments;
use crate::m20250601_000002_create_work_phases_table::WorkPhases;
use crate::m20250601_000004_create_production_orders_table::ProductionOrders;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250601_000006_create_workforce_tables"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Employees::EmployeeNumber)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Employees::FirstName).string_len(100).null())
                    .col(ColumnDef::new(Employees::LastName).string_len(100).null())
                    .col(
                        ColumnDef::new(Employees::PrimaryDepartmentId)
                            .integer()
                            .null(),
                    )
                    .col(ColumnDef::new(Employees::HireDate).date().null())
                    .col(
                        ColumnDef::new(Employees::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Employees::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employees_primary_department")
                            .from(Employees::Table, Employees::PrimaryDepartmentId)
                            .to(Departments::Table, Departments::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductionTasks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProductionTasks::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProductionTasks::TaskUuid)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ProductionTasks::ProductionOrderId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProductionTasks::EmployeeId).integer().null())
                    .col(
                        ColumnDef::new(ProductionTasks::DepartmentId)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProductionTasks::WorkPhaseId)
                            .integer()
                            .null(),
                    )
                    .col(ColumnDef::new(ProductionTasks::BatchUuid).uuid().null())
                    .col(
                        ColumnDef::new(ProductionTasks::StartedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProductionTasks::EndedAt).timestamp().null())
                    .col(
                        ColumnDef::new(ProductionTasks::QuantityCompleted)
                            .decimal_len(10, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(ProductionTasks::Comment).text().null())
                    .col(
                        ColumnDef::new(ProductionTasks::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_production_tasks_order")
                            .from(ProductionTasks::Table, ProductionTasks::ProductionOrderId)
                            .to(ProductionOrders::Table, ProductionOrders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_production_tasks_employee")
                            .from(ProductionTasks::Table, ProductionTasks::EmployeeId)
                            .to(Employees::Table, Employees::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_production_tasks_department")
                            .from(ProductionTasks::Table, ProductionTasks::DepartmentId)
                            .to(Departments::Table, Departments::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_production_tasks_work_phase")
                            .from(ProductionTasks::Table, ProductionTasks::WorkPhaseId)
                            .to(WorkPhases::Table, WorkPhases::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_production_tasks_batch_uuid")
                    .table(ProductionTasks::Table)
                    .col(ProductionTasks::BatchUuid)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductionTasks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Employees {
    Table,
    Id,
    EmployeeNumber,
    FirstName,
    LastName,
    PrimaryDepartmentId,
    HireDate,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum ProductionTasks {
    Table,
    Id,
    TaskUuid,
    ProductionOrderId,
    EmployeeId,
    DepartmentId,
    WorkPhaseId,
    BatchUuid,
    StartedAt,
    EndedAt,
    QuantityCompleted,
    Comment,
    CreatedAt,
}
