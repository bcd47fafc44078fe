//! Integration tests for the product and product category endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn create_product_resolves_seeded_category() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/v1/products/",
            json!({
                "item_number": "ABC-001",
                "description": "Testituote",
                "category_code": "A",
                "standard_time_minutes": 12.5
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["item_number"], "ABC-001");
    assert_eq!(body["is_active"], true);
    assert_eq!(body["category"]["code"], "A");
    assert_eq!(body["category"]["name"], "Kategoria A");
}

#[tokio::test]
async fn create_product_with_unknown_category_is_rejected() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/v1/products/",
            json!({"item_number": "ABC-001", "category_code": "ZZ"}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("ZZ"));

    // The product must not have been created
    let (status, _) = app.get("/api/v1/products/by-number/ABC-001").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_item_number_is_rejected() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post("/api/v1/products/", json!({"item_number": "ABC-001"}))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app
        .post("/api/v1/products/", json!({"item_number": "ABC-001"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("ABC-001"));
}

#[tokio::test]
async fn get_product_by_id_and_number() {
    let app = TestApp::new().await;

    let (_, created) = app
        .post(
            "/api/v1/products/",
            json!({"item_number": "XYZ-100", "category_code": "B"}),
        )
        .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = app.get(&format!("/api/v1/products/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["item_number"], "XYZ-100");
    assert_eq!(body["category"]["code"], "B");

    let (status, body) = app.get("/api/v1/products/by-number/XYZ-100").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);

    let (status, _) = app.get("/api/v1/products/999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app.get("/api/v1/products/by-number/EIOLE-1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn partial_update_keeps_omitted_fields() {
    let app = TestApp::new().await;

    let (_, created) = app
        .post(
            "/api/v1/products/",
            json!({
                "item_number": "UPD-001",
                "description": "Alkuperäinen",
                "category_code": "C",
                "standard_time_minutes": 30
            }),
        )
        .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = app
        .put(
            &format!("/api/v1/products/{}", id),
            json!({"description": "Päivitetty"}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], "Päivitetty");
    assert_eq!(body["item_number"], "UPD-001");
    assert_eq!(body["category_code"], "C");
    assert_eq!(body["is_active"], true);
    assert_eq!(
        body["standard_time_minutes"],
        created["standard_time_minutes"]
    );
}

#[tokio::test]
async fn update_category_must_reference_an_existing_one() {
    let app = TestApp::new().await;

    let (_, created) = app
        .post("/api/v1/products/", json!({"item_number": "CAT-001"}))
        .await;
    let id = created["id"].as_i64().unwrap();

    let (status, _) = app
        .put(
            &format!("/api/v1/products/{}", id),
            json!({"category_code": "ZZ"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .put(
            &format!("/api/v1/products/{}", id),
            json!({"category_code": "D"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"]["code"], "D");
}

#[tokio::test]
async fn search_matches_item_number_prefix_only() {
    let app = TestApp::new().await;

    for item in ["ABC-001", "ABC-002", "XABC-003"] {
        let (status, _) = app
            .post("/api/v1/products/", json!({"item_number": item}))
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = app.get("/api/v1/products/search?q=ABC&limit=10").await;
    assert_eq!(status, StatusCode::OK);

    let numbers: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["item_number"].as_str().unwrap())
        .collect();
    assert_eq!(numbers, vec!["ABC-001", "ABC-002"]);

    // Prefix matching is case-insensitive
    let (_, body) = app.get("/api/v1/products/search?q=abc").await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    // Missing search term is rejected
    let (status, _) = app.get("/api/v1/products/search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_ignores_inactive_products() {
    let app = TestApp::new().await;

    let (_, created) = app
        .post("/api/v1/products/", json!({"item_number": "ABC-001"}))
        .await;
    let id = created["id"].as_i64().unwrap();
    app.post("/api/v1/products/", json!({"item_number": "ABC-002"}))
        .await;

    app.post_empty(&format!("/api/v1/products/{}/deactivate", id))
        .await;

    let (_, body) = app.get("/api/v1/products/search?q=ABC").await;
    let numbers: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["item_number"].as_str().unwrap())
        .collect();
    assert_eq!(numbers, vec!["ABC-002"]);
}

#[tokio::test]
async fn listing_filters_by_category_and_activity() {
    let app = TestApp::new().await;

    app.post(
        "/api/v1/products/",
        json!({"item_number": "A-1", "category_code": "A"}),
    )
    .await;
    app.post(
        "/api/v1/products/",
        json!({"item_number": "B-1", "category_code": "B"}),
    )
    .await;
    let (_, created) = app
        .post(
            "/api/v1/products/",
            json!({"item_number": "B-2", "category_code": "B"}),
        )
        .await;
    app.post_empty(&format!(
        "/api/v1/products/{}/deactivate",
        created["id"].as_i64().unwrap()
    ))
    .await;

    let (_, body) = app.get("/api/v1/products/?category_code=B").await;
    assert_eq!(body["total"], 2);

    let (_, body) = app
        .get("/api/v1/products/?category_code=B&is_active=true")
        .await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["item_number"], "B-1");

    let (_, active) = app.get("/api/v1/products/?is_active=true").await;
    let (_, inactive) = app.get("/api/v1/products/?is_active=false").await;
    let (_, all) = app.get("/api/v1/products/").await;
    assert_eq!(
        active["total"].as_u64().unwrap() + inactive["total"].as_u64().unwrap(),
        all["total"].as_u64().unwrap()
    );
}

#[tokio::test]
async fn listing_searches_description_too() {
    let app = TestApp::new().await;

    app.post(
        "/api/v1/products/",
        json!({"item_number": "DES-1", "description": "Punainen kassi"}),
    )
    .await;
    app.post(
        "/api/v1/products/",
        json!({"item_number": "DES-2", "description": "Sininen kassi"}),
    )
    .await;

    let (_, body) = app.get("/api/v1/products/?search=punainen").await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["item_number"], "DES-1");

    let (_, body) = app.get("/api/v1/products/?search=kassi").await;
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn product_stats_track_create_and_deactivate() {
    let app = TestApp::new().await;

    let (_, body) = app.get("/api/v1/products/stats").await;
    assert_eq!(body["total"], 0);

    let (_, created) = app
        .post("/api/v1/products/", json!({"item_number": "ST-1"}))
        .await;
    app.post("/api/v1/products/", json!({"item_number": "ST-2"}))
        .await;
    app.post_empty(&format!(
        "/api/v1/products/{}/deactivate",
        created["id"].as_i64().unwrap()
    ))
    .await;

    let (_, body) = app.get("/api/v1/products/stats").await;
    assert_eq!(body["total"], 2);
    assert_eq!(body["active"], 1);
    assert_eq!(body["inactive"], 1);
}

#[tokio::test]
async fn delete_product_returns_204() {
    let app = TestApp::new().await;

    let (_, created) = app
        .post("/api/v1/products/", json!({"item_number": "DEL-1"}))
        .await;
    let id = created["id"].as_i64().unwrap();

    let (status, _) = app.delete(&format!("/api/v1/products/{}", id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get(&format!("/api/v1/products/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn negative_standard_time_is_rejected() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post(
            "/api/v1/products/",
            json!({"item_number": "NEG-1", "standard_time_minutes": -5}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// Product categories

#[tokio::test]
async fn seeded_categories_are_listed_in_code_order() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/v1/product-categories/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 6);

    let codes: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["A", "B", "C", "D", "E", "F"]);
}

#[tokio::test]
async fn category_crud_round_trip() {
    let app = TestApp::new().await;

    let (status, created) = app
        .post(
            "/api/v1/product-categories/",
            json!({"code": "G", "name": "Kategoria G", "efficiency_multiplier": 1.6}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (status, body) = app.get("/api/v1/product-categories/by-code/G").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);

    let (status, body) = app
        .put(
            &format!("/api/v1/product-categories/{}", id),
            json!({"name": "Erikoiskategoria"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Erikoiskategoria");
    assert_eq!(body["code"], "G");

    let (status, _) = app
        .delete(&format!("/api/v1/product-categories/{}", id))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get("/api/v1/product-categories/by-code/G").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_category_code_is_rejected() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post("/api/v1/product-categories/", json!({"code": "A"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post(
            "/api/v1/product-categories/",
            json!({"code": "H", "efficiency_multiplier": -1}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
