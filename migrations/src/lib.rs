pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_departments_table;
mod m20250601_000002_create_work_phases_table;
mod m20250601_000003_create_product_tables;
mod m20250601_000004_create_production_orders_table;
mod m20250601_000005_create_order_tracking_tables;
mod m20250601_000006_create_workforce_tables;
mod m20250601_000007_create_planning_tables;
mod m20250601_000008_create_efficiency_tables;
mod m20250608_000009_seed_reference_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_departments_table::Migration),
            Box::new(m20250601_000002_create_work_phases_table::Migration),
            Box::new(m20250601_000003_create_product_tables::Migration),
            Box::new(m20250601_000004_create_production_orders_table::Migration),
            Box::new(m20250601_000005_create_order_tracking_tables::Migration),
            Box::new(m20250601_000006_create_workforce_tables::Migration),
            Box::new(m20250601_000007_create_planning_tables::Migration),
            Box::new(m20250601_000008_create_efficiency_tables::Migration),
            Box::new(m20250608_000009_seed_reference_data::Migration),
        ]
    }
}
