use sea_orm_migration::prelude::*;

use crate::m20250601_000001_create_departments_table::Departments;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250601_000002_create_work_phases_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkPhases::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkPhases::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(WorkPhases::DepartmentId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(WorkPhases::Code).string_len(20).not_null())
                    .col(ColumnDef::new(WorkPhases::Name).string_len(100).not_null())
                    .col(ColumnDef::new(WorkPhases::DisplayOrder).integer().null())
                    .col(
                        ColumnDef::new(WorkPhases::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_phases_department")
                            .from(WorkPhases::Table, WorkPhases::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_department_phase")
                    .table(WorkPhases::Table)
                    .col(WorkPhases::DepartmentId)
                    .col(WorkPhases::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkPhases::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WorkPhases {
    Table,
    Id,
    DepartmentId,
    Code,
    Name,
    DisplayOrder,
    IsActive,
}
