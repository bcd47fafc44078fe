//! Schema-level tests: cascade rules, unique constraints and values derived
//! from the stored columns.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, Set};
use serde_json::json;
use uuid::Uuid;

use common::TestApp;
use prodtrack_api::entities::{
    bom_item, department, employee, order_department_status, order_phase_value, production_order,
    production_task, weekly_plan, weekly_plan_item, work_phase,
};

async fn seeded_department(app: &TestApp, code: &str) -> department::Model {
    department::Entity::find()
        .filter(department::Column::Code.eq(code))
        .one(&*app.state.db)
        .await
        .expect("query failed")
        .expect("seeded department missing")
}

async fn insert_order(app: &TestApp, order_number: &str) -> production_order::Model {
    production_order::ActiveModel {
        order_number: Set(order_number.to_string()),
        quantity: Set(100),
        queue_position: Set(0),
        created_at: Set(Utc::now()),
        updated_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&*app.state.db)
    .await
    .expect("failed to insert production order")
}

#[tokio::test]
async fn deleting_a_department_cascades_to_its_work_phases() {
    let app = TestApp::new().await;
    let db = &*app.state.db;

    let dept = seeded_department(&app, "PAINATUS").await;

    let phases_before = work_phase::Entity::find()
        .filter(work_phase::Column::DepartmentId.eq(dept.id))
        .count(db)
        .await
        .unwrap();
    assert_eq!(phases_before, 6);

    let (status, _) = app
        .delete(&format!("/api/v1/departments/{}", dept.id))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let phases_after = work_phase::Entity::find()
        .filter(work_phase::Column::DepartmentId.eq(dept.id))
        .count(db)
        .await
        .unwrap();
    assert_eq!(phases_after, 0);
}

#[tokio::test]
async fn deleting_a_department_does_not_touch_orders_pointing_at_it() {
    let app = TestApp::new().await;
    let db = &*app.state.db;

    let dept = seeded_department(&app, "PAKKAUS").await;
    let order = insert_order(&app, "TT-1001").await;
    let mut active: production_order::ActiveModel = order.clone().into();
    active.current_department_id = Set(Some(dept.id));
    active.update(db).await.unwrap();

    // The department cannot be deleted while an order references it; the
    // order itself must survive.
    let (status, _) = app
        .delete(&format!("/api/v1/departments/{}", dept.id))
        .await;
    assert_ne!(status, StatusCode::NO_CONTENT);

    let order_still_there = production_order::Entity::find_by_id(order.id)
        .one(db)
        .await
        .unwrap();
    assert!(order_still_there.is_some());
}

#[tokio::test]
async fn deleting_a_product_cascades_to_its_bom_items() {
    let app = TestApp::new().await;
    let db = &*app.state.db;

    let (_, created) = app
        .post("/api/v1/products/", json!({"item_number": "BOM-001"}))
        .await;
    let product_id = created["id"].as_i64().unwrap() as i32;

    bom_item::ActiveModel {
        product_id: Set(product_id),
        material_code: Set("MAT-1".to_string()),
        material_name: Set(Some("Kangas".to_string())),
        quantity: Set(dec!(2.50)),
        unit: Set(Some("m".to_string())),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let (status, _) = app
        .delete(&format!("/api/v1/products/{}", product_id))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let remaining = bom_item::Entity::find()
        .filter(bom_item::Column::ProductId.eq(product_id))
        .count(db)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}

#[tokio::test]
async fn deleting_an_order_cascades_to_statuses_values_and_tasks() {
    let app = TestApp::new().await;
    let db = &*app.state.db;

    let dept = seeded_department(&app, "LEIKKAUS").await;
    let phase = work_phase::Entity::find()
        .filter(work_phase::Column::DepartmentId.eq(dept.id))
        .one(db)
        .await
        .unwrap()
        .unwrap();
    let order = insert_order(&app, "TT-2001").await;

    order_department_status::ActiveModel {
        production_order_id: Set(order.id),
        department_id: Set(dept.id),
        status: Set(order_department_status::OrderStatus::InProgress),
        quantity_completed: Set(10),
        started_at: Set(Some(Utc::now())),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    order_phase_value::ActiveModel {
        production_order_id: Set(order.id),
        work_phase_id: Set(phase.id),
        value: Set(Some("5/100".to_string())),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    production_task::ActiveModel {
        task_uuid: Set(Uuid::new_v4()),
        production_order_id: Set(order.id),
        department_id: Set(Some(dept.id)),
        work_phase_id: Set(Some(phase.id)),
        started_at: Set(Utc::now()),
        quantity_completed: Set(dec!(10)),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    order.delete(db).await.unwrap();

    let statuses = order_department_status::Entity::find().count(db).await.unwrap();
    let values = order_phase_value::Entity::find().count(db).await.unwrap();
    let tasks = production_task::Entity::find().count(db).await.unwrap();
    assert_eq!((statuses, values, tasks), (0, 0, 0));
}

#[tokio::test]
async fn order_department_pair_is_unique() {
    let app = TestApp::new().await;
    let db = &*app.state.db;

    let dept = seeded_department(&app, "REMMIT").await;
    let order = insert_order(&app, "TT-3001").await;

    order_department_status::ActiveModel {
        production_order_id: Set(order.id),
        department_id: Set(dept.id),
        status: Set(order_department_status::OrderStatus::NotStarted),
        quantity_completed: Set(0),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let duplicate = order_department_status::ActiveModel {
        production_order_id: Set(order.id),
        department_id: Set(dept.id),
        status: Set(order_department_status::OrderStatus::NotStarted),
        quantity_completed: Set(0),
        ..Default::default()
    }
    .insert(db)
    .await;

    assert!(duplicate.is_err());
}

#[tokio::test]
async fn weekly_plan_cascade_and_unique_pair() {
    let app = TestApp::new().await;
    let db = &*app.state.db;

    let order = insert_order(&app, "TT-4001").await;

    let plan = weekly_plan::ActiveModel {
        week_number: Set(23),
        year: Set(2025),
        num_workers: Set(Some(8)),
        work_days_per_week: Set(5),
        hours_per_day: Set(dec!(7.5)),
        created_at: Set(Utc::now()),
        updated_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    weekly_plan_item::ActiveModel {
        weekly_plan_id: Set(plan.id),
        production_order_id: Set(order.id),
        planned_sequence: Set(Some(1)),
        priority: Set(0),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    // Second plan for the same week/year is rejected
    let duplicate = weekly_plan::ActiveModel {
        week_number: Set(23),
        year: Set(2025),
        work_days_per_week: Set(5),
        hours_per_day: Set(dec!(7.5)),
        created_at: Set(Utc::now()),
        updated_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await;
    assert!(duplicate.is_err());

    plan.delete(db).await.unwrap();

    let items = weekly_plan_item::Entity::find().count(db).await.unwrap();
    assert_eq!(items, 0);

    // The scheduled order itself is untouched
    let order_still_there = production_order::Entity::find_by_id(order.id)
        .one(db)
        .await
        .unwrap();
    assert!(order_still_there.is_some());
}

#[test]
fn weekly_plan_total_hours_is_derived_from_capacity_fields() {
    let plan = weekly_plan::Model {
        id: 1,
        week_number: 23,
        year: 2025,
        num_workers: Some(8),
        work_days_per_week: 5,
        hours_per_day: dec!(7.5),
        notes: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };
    assert_eq!(plan.total_planned_hours(), Some(dec!(300.0)));

    let unstaffed = weekly_plan::Model {
        num_workers: None,
        ..plan
    };
    assert_eq!(unstaffed.total_planned_hours(), None);
}

#[test]
fn task_duration_is_derived_from_timestamps() {
    let started = Utc::now();
    let task = production_task::Model {
        id: 1,
        task_uuid: Uuid::new_v4(),
        production_order_id: 1,
        employee_id: None,
        department_id: None,
        work_phase_id: None,
        batch_uuid: None,
        started_at: started,
        ended_at: Some(started + Duration::minutes(90)),
        quantity_completed: dec!(10),
        comment: None,
        created_at: started,
    };
    assert_eq!(task.duration_minutes(), Some(90));

    let running = production_task::Model {
        ended_at: None,
        ..task
    };
    assert_eq!(running.duration_minutes(), None);
}

#[test]
fn employee_full_name_falls_back_to_badge_number() {
    let employee = employee::Model {
        id: 1,
        employee_number: "EMP001".to_string(),
        first_name: Some("Matti".to_string()),
        last_name: Some("Meikäläinen".to_string()),
        primary_department_id: None,
        hire_date: None,
        is_active: true,
        created_at: Utc::now(),
    };
    assert_eq!(employee.full_name(), "Matti Meikäläinen");

    let anonymous = employee::Model {
        first_name: None,
        last_name: None,
        ..employee
    };
    assert_eq!(anonymous.full_name(), "EMP001");
}
