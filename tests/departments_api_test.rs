//! Integration tests for the department endpoints, driven through the real
//! router over an in-memory SQLite database.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::TestApp;

async fn department_id_by_code(app: &TestApp, code: &str) -> i64 {
    let (status, body) = app
        .get(&format!("/api/v1/departments/by-code/{}", code))
        .await;
    assert_eq!(status, StatusCode::OK);
    body["id"].as_i64().expect("department id")
}

#[tokio::test]
async fn seeded_departments_are_queryable_by_code() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/v1/departments/by-code/LEIKKAUS").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], "LEIKKAUS");
    assert_eq!(body["name"], "Leikkaus");
    assert_eq!(body["display_order"], 1);
    assert_eq!(body["color"], "#FF6B6B");
    assert_eq!(body["is_active"], true);
}

#[tokio::test]
async fn create_department_defaults_to_active() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/v1/departments/",
            json!({"code": "TESTIOSASTO", "name": "Testiosasto", "display_order": 42}),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["code"], "TESTIOSASTO");
    assert_eq!(body["is_active"], true);

    let (status, body) = app.get("/api/v1/departments/by-code/TESTIOSASTO").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Testiosasto");
    assert_eq!(body["display_order"], 42);
}

#[tokio::test]
async fn duplicate_department_code_is_rejected() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/v1/departments/",
            json!({"code": "LEIKKAUS", "name": "Toinen leikkaus"}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("LEIKKAUS"));
}

#[tokio::test]
async fn invalid_color_is_rejected_before_create() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post(
            "/api/v1/departments/",
            json!({"code": "VARIT", "name": "Värit", "color": "red"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Nothing was created for the rejected payload.
    let (status, _) = app.get("/api/v1/departments/by-code/VARIT").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_is_case_insensitive_substring() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/v1/departments/?search=leikk").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["code"], "LEIKKAUS");
}

#[tokio::test]
async fn pagination_reports_page_and_keeps_total_invariant() {
    let app = TestApp::new().await;

    let (status, first_page) = app.get("/api/v1/departments/?skip=0&limit=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first_page["items"].as_array().unwrap().len(), 3);
    assert_eq!(first_page["total"], 7);
    assert_eq!(first_page["page"], 1);
    assert_eq!(first_page["page_size"], 3);

    let (status, second_page) = app.get("/api/v1/departments/?skip=3&limit=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second_page["total"], 7);
    assert_eq!(second_page["page"], 2);

    // limit outside 1-500 is rejected before any query runs
    let (status, _) = app.get("/api/v1/departments/?limit=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = app.get("/api/v1/departments/?limit=501").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn active_filter_partitions_the_full_listing() {
    let app = TestApp::new().await;

    let id = department_id_by_code(&app, "PAINATUS").await;
    let (status, _) = app
        .post_empty(&format!("/api/v1/departments/{}/deactivate", id))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, active) = app.get("/api/v1/departments/?is_active=true").await;
    let (_, inactive) = app.get("/api/v1/departments/?is_active=false").await;
    let (_, all) = app.get("/api/v1/departments/").await;

    assert_eq!(active["total"], 6);
    assert_eq!(inactive["total"], 1);
    assert_eq!(all["total"], 7);
    assert_eq!(inactive["items"][0]["code"], "PAINATUS");
}

#[tokio::test]
async fn deactivate_then_activate_restores_other_fields() {
    let app = TestApp::new().await;

    let id = department_id_by_code(&app, "REMMIT").await;

    let (status, body) = app
        .post_empty(&format!("/api/v1/departments/{}/deactivate", id))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_active"], false);

    let (status, body) = app
        .post_empty(&format!("/api/v1/departments/{}/activate", id))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_active"], true);
    assert_eq!(body["code"], "REMMIT");
    assert_eq!(body["name"], "Remmit");
    assert_eq!(body["display_order"], 2);
    assert_eq!(body["color"], "#4ECDC4");
}

#[tokio::test]
async fn partial_update_leaves_omitted_fields_unchanged() {
    let app = TestApp::new().await;

    let id = department_id_by_code(&app, "HYGIENIA").await;

    let (status, body) = app
        .put(
            &format!("/api/v1/departments/{}", id),
            json!({"name": "Hygienia ja puhtaus"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Hygienia ja puhtaus");
    assert_eq!(body["code"], "HYGIENIA");
    assert_eq!(body["color"], "#96CEB4");
    assert_eq!(body["display_order"], 4);

    // An empty body is a no-op update
    let (status, body) = app
        .put(&format!("/api/v1/departments/{}", id), json!({}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Hygienia ja puhtaus");
}

#[tokio::test]
async fn update_to_existing_code_is_rejected() {
    let app = TestApp::new().await;

    let id = department_id_by_code(&app, "PAKKAUS").await;

    let (status, _) = app
        .put(
            &format!("/api/v1/departments/{}", id),
            json!({"code": "LEIKKAUS"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Re-submitting the department's own code is not a conflict
    let (status, _) = app
        .put(
            &format!("/api/v1/departments/{}", id),
            json!({"code": "PAKKAUS"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn unknown_department_returns_404() {
    let app = TestApp::new().await;

    let (status, _) = app.get("/api/v1/departments/999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get("/api/v1/departments/by-code/EIOLE").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete("/api/v1/departments/999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.put("/api/v1/departments/999999", json!({"name": "x"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .post_empty("/api/v1/departments/999999/deactivate")
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_returns_204_and_removes_the_department() {
    let app = TestApp::new().await;

    let (_, created) = app
        .post(
            "/api/v1/departments/",
            json!({"code": "POISTETTAVA", "name": "Poistettava"}),
        )
        .await;
    let id = created["id"].as_i64().unwrap();

    let (status, _) = app.delete(&format!("/api/v1/departments/{}", id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get(&format!("/api/v1/departments/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn with_stats_counts_phases_and_queued_orders() {
    let app = TestApp::new().await;

    let id = department_id_by_code(&app, "LEIKKAUS").await;

    let (status, body) = app
        .get(&format!("/api/v1/departments/{}/with-stats", id))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], "LEIKKAUS");
    // Six generic phases are seeded per department
    assert_eq!(body["work_phase_count"], 6);
    assert_eq!(body["active_orders_count"], 0);

    let (status, _) = app.get("/api/v1/departments/999999/with-stats").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stats_counts_follow_soft_deletes() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/v1/departments/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 7);
    assert_eq!(body["active"], 7);
    assert_eq!(body["inactive"], 0);

    let id = department_id_by_code(&app, "ERIKOISPUOLI").await;
    app.post_empty(&format!("/api/v1/departments/{}/deactivate", id))
        .await;

    let (_, body) = app.get("/api/v1/departments/stats").await;
    assert_eq!(body["total"], 7);
    assert_eq!(body["active"], 6);
    assert_eq!(body["inactive"], 1);
}

#[tokio::test]
async fn reorder_applies_known_ids_and_skips_unknown_ones() {
    let app = TestApp::new().await;

    let id = department_id_by_code(&app, "LEIKKAUS").await;

    let (status, body) = app
        .post(
            "/api/v1/departments/reorder",
            json!({ id.to_string(): 5, "999999": 0 }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let updated = body.as_array().expect("array of updated departments");
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0]["id"], id);
    assert_eq!(updated[0]["display_order"], 5);

    let (_, body) = app.get(&format!("/api/v1/departments/{}", id)).await;
    assert_eq!(body["display_order"], 5);
}

#[tokio::test]
async fn active_listing_is_ordered_with_missing_display_order_last() {
    let app = TestApp::new().await;

    // No display order: sorts after every department that has one, despite
    // the name sorting first alphabetically.
    app.post(
        "/api/v1/departments/",
        json!({"code": "AATOSASTO", "name": "Aatosasto"}),
    )
    .await;

    let (status, body) = app.get("/api/v1/departments/active").await;
    assert_eq!(status, StatusCode::OK);

    let codes: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["code"].as_str().unwrap())
        .collect();

    assert_eq!(codes.first(), Some(&"LEIKKAUS"));
    assert_eq!(codes.last(), Some(&"AATOSASTO"));

    // Deactivated departments disappear from the active listing
    let id = department_id_by_code(&app, "AATOSASTO").await;
    app.post_empty(&format!("/api/v1/departments/{}/deactivate", id))
        .await;
    let (_, body) = app.get("/api/v1/departments/active").await;
    assert!(body
        .as_array()
        .unwrap()
        .iter()
        .all(|d| d["code"] != "AATOSASTO"));
}
