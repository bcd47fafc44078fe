use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

use crate::m20250601_000001_create_departments_table::Departments;
use crate::m20250601_000002_create_work_phases_table::WorkPhases;
use crate::m20250601_000003_create_product_tables::ProductCategories;
use crate::m20250601_000006_create_workforce_tables::Employees;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250608_000009_seed_reference_data"
    }
}

/// Factory departments in display order. Codes and colors are a contract
/// with existing frontends and exports; do not change them here.
const DEPARTMENTS: [(&str, &str, i32, &str); 7] = [
    ("LEIKKAUS", "Leikkaus", 1, "#FF6B6B"),
    ("REMMIT", "Remmit", 2, "#4ECDC4"),
    ("ESIVALMISTELU", "Esivalmistelu", 3, "#45B7D1"),
    ("HYGIENIA", "Hygienia", 4, "#96CEB4"),
    ("ERIKOISPUOLI", "Erikoispuoli", 5, "#FFEAA7"),
    ("PAKKAUS", "Pakkaus", 6, "#DFE6E9"),
    ("PAINATUS", "Painatus", 7, "#A29BFE"),
];

const CATEGORIES: [(&str, &str, f64); 6] = [
    ("A", "Kategoria A", 1.00),
    ("B", "Kategoria B", 1.10),
    ("C", "Kategoria C", 1.20),
    ("D", "Kategoria D", 1.30),
    ("E", "Kategoria E", 1.40),
    ("F", "Kategoria F", 1.50),
];

/// Sample employees: (number, first name, last name, primary department code).
const EMPLOYEES: [(&str, &str, &str, &str); 6] = [
    ("EMP001", "Matti", "Meikäläinen", "LEIKKAUS"),
    ("EMP002", "Maija", "Virtanen", "REMMIT"),
    ("EMP003", "Pekka", "Pouta", "HYGIENIA"),
    ("EMP004", "Liisa", "Lahtinen", "ESIVALMISTELU"),
    ("EMP005", "Kalle", "Korhonen", "ERIKOISPUOLI"),
    ("EMP006", "Anna", "Anttila", "PAKKAUS"),
];

const PHASES_PER_DEPARTMENT: i32 = 6;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert_departments = Query::insert()
            .into_table(Departments::Table)
            .columns([
                Departments::Code,
                Departments::Name,
                Departments::DisplayOrder,
                Departments::Color,
                Departments::IsActive,
            ])
            .to_owned();
        for (code, name, display_order, color) in DEPARTMENTS {
            insert_departments.values_panic([
                code.into(),
                name.into(),
                display_order.into(),
                color.into(),
                true.into(),
            ]);
        }
        manager.exec_stmt(insert_departments).await?;

        // Department ids are assigned by the database; read them back so the
        // phase and employee rows reference the real keys.
        let db = manager.get_connection();
        let backend = db.get_database_backend();
        let select = Query::select()
            .columns([Departments::Id, Departments::Code])
            .from(Departments::Table)
            .to_owned();
        let rows = db.query_all(backend.build(&select)).await?;

        let mut department_ids: Vec<(String, i32)> = Vec::with_capacity(rows.len());
        for row in rows {
            let id: i32 = row.try_get("", "id")?;
            let code: String = row.try_get("", "code")?;
            department_ids.push((code, id));
        }
        let department_id = |code: &str| -> Result<i32, DbErr> {
            department_ids
                .iter()
                .find(|(c, _)| c == code)
                .map(|(_, id)| *id)
                .ok_or_else(|| DbErr::Custom(format!("seeded department '{}' missing", code)))
        };

        let mut insert_phases = Query::insert()
            .into_table(WorkPhases::Table)
            .columns([
                WorkPhases::DepartmentId,
                WorkPhases::Code,
                WorkPhases::Name,
                WorkPhases::DisplayOrder,
                WorkPhases::IsActive,
            ])
            .to_owned();
        for (code, name, _, _) in DEPARTMENTS {
            let dept_id = department_id(code)?;
            for phase in 1..=PHASES_PER_DEPARTMENT {
                insert_phases.values_panic([
                    dept_id.into(),
                    format!("PHASE_{}", phase).into(),
                    format!("{} {}", name, phase).into(),
                    phase.into(),
                    true.into(),
                ]);
            }
        }
        manager.exec_stmt(insert_phases).await?;

        let mut insert_categories = Query::insert()
            .into_table(ProductCategories::Table)
            .columns([
                ProductCategories::Code,
                ProductCategories::Name,
                ProductCategories::EfficiencyMultiplier,
            ])
            .to_owned();
        for (code, name, multiplier) in CATEGORIES {
            insert_categories.values_panic([code.into(), name.into(), multiplier.into()]);
        }
        manager.exec_stmt(insert_categories).await?;

        let mut insert_employees = Query::insert()
            .into_table(Employees::Table)
            .columns([
                Employees::EmployeeNumber,
                Employees::FirstName,
                Employees::LastName,
                Employees::PrimaryDepartmentId,
                Employees::IsActive,
            ])
            .to_owned();
        for (number, first_name, last_name, dept_code) in EMPLOYEES {
            insert_employees.values_panic([
                number.into(),
                first_name.into(),
                last_name.into(),
                department_id(dept_code)?.into(),
                true.into(),
            ]);
        }
        manager.exec_stmt(insert_employees).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Remove seed data in reverse dependency order.
        manager
            .exec_stmt(Query::delete().from_table(Employees::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(WorkPhases::Table).to_owned())
            .await?;
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(ProductCategories::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(Departments::Table).to_owned())
            .await
    }
}
