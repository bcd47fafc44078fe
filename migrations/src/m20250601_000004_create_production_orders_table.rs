use sea_orm_migration::prelude::*;

use crate::m20250601_000001_create_departments_table::Departments;
use crate::m20250601_000003_create_product_tables::Products;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250601_000004_create_production_orders_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductionOrders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProductionOrders::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProductionOrders::OrderNumber)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ProductionOrders::ReferenceNumber)
                            .string_len(100)
                            .null(),
                    )
                    .col(ColumnDef::new(ProductionOrders::ProductId).integer().null())
                    .col(
                        ColumnDef::new(ProductionOrders::Quantity)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProductionOrders::ShipDate).date().null())
                    .col(
                        ColumnDef::new(ProductionOrders::WeekNumber)
                            .integer()
                            .null(),
                    )
                    .col(ColumnDef::new(ProductionOrders::Year).integer().null())
                    .col(
                        ColumnDef::new(ProductionOrders::CurrentDepartmentId)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProductionOrders::QueuePosition)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(ProductionOrders::Notes).text().null())
                    .col(
                        ColumnDef::new(ProductionOrders::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ProductionOrders::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_production_orders_product")
                            .from(ProductionOrders::Table, ProductionOrders::ProductId)
                            .to(Products::Table, Products::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_production_orders_current_department")
                            .from(
                                ProductionOrders::Table,
                                ProductionOrders::CurrentDepartmentId,
                            )
                            .to(Departments::Table, Departments::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_production_orders_reference_number")
                    .table(ProductionOrders::Table)
                    .col(ProductionOrders::ReferenceNumber)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_production_orders_week_year")
                    .table(ProductionOrders::Table)
                    .col(ProductionOrders::WeekNumber)
                    .col(ProductionOrders::Year)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductionOrders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProductionOrders {
    Table,
    Id,
    OrderNumber,
    ReferenceNumber,
    ProductId,
    Quantity,
    ShipDate,
    WeekNumber,
    Year,
    CurrentDepartmentId,
    QueuePosition,
    Notes,
    CreatedAt,
    UpdatedAt,
}
