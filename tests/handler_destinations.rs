mod common;

use axum_test::TestServer;
use destinations_api::api::routes::destination_routes;
use serde_json::json;
use sqlx::PgPool;

fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = destination_routes().with_state(state);
    TestServer::new(app).unwrap()
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_empty(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/destinations").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[sqlx::test]
async fn test_list_projection(pool: PgPool) {
    common::create_paris(&pool).await;
    common::create_bare_destination(&pool, "Rome").await;
    let server = make_server(pool);

    let response = server.get("/destinations").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);

    for item in items {
        let keys: Vec<&str> = item.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 4);
        for key in ["id", "name", "description", "image_url"] {
            assert!(keys.contains(&key), "missing {key}");
        }
    }

    assert_eq!(items[1]["name"], "Rome");
    assert!(items[1]["description"].is_null());
}

// ─── SHOW ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_paris_scenario(pool: PgPool) {
    let id = common::create_paris(&pool).await;
    let server = make_server(pool);

    let response = server.get("/destinations").await;
    response.assert_status_ok();
    response.assert_json(&json!([{
        "id": id,
        "name": "Paris",
        "description": "City of light",
        "image_url": "paris.jpg"
    }]));

    let response = server.get(&format!("/destinations/{id}")).await;
    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Paris");
    assert_eq!(body["lat"], 48.8566);
    assert_eq!(body["lng"], 2.3522);
    assert!(body["created_at"].is_string());
    assert!(body["updated_at"].is_string());

    server
        .get(&format!("/destinations/{}", id + 1))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_show_not_found(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/destinations/999999").await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_show_malformed_id(pool: PgPool) {
    let server = make_server(pool);

    server.get("/destinations/abc").await.assert_status_not_found();
    server.get("/destinations/-1").await.assert_status_not_found();
}
