//! SeaORM entity definitions for the production tracking schema.
//!
//! One module per table; relations mirror the foreign keys declared in the
//! `migrations` crate.

pub mod bom_item;
pub mod department;
pub mod efficiency_item;
pub mod efficiency_summary;
pub mod employee;
pub mod order_department_status;
pub mod order_phase_value;
pub mod product;
pub mod product_category;
pub mod production_order;
pub mod production_task;
pub mod weekly_plan;
pub mod weekly_plan_item;
pub mod work_phase;
