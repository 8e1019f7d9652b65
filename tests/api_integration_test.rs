use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use cutter_lib::api;
use cutter_lib::infrastructure::{AppState, FsPartitionLoader};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

// Helper to build the API over the bundled reference tables
fn setup_app() -> Router {
    let data_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/data");
    let state = AppState::new(Arc::new(FsPartitionLoader::new(data_dir)));
    api::api_router(state)
}

fn post_json(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let response = setup_app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_resolve_between_entries() {
    let payload = serde_json::json!({ "name": "Thompson" });
    let response = setup_app()
        .oneshot(post_json("/cutter/resolve", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["code"], "T36");
    assert_eq!(body["selected_entry"]["name"], "Thomas, J.");
    assert_eq!(body["first_letter"], "T");
    assert_eq!(body["nearby_matches"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_resolve_empty_name() {
    let payload = serde_json::json!({ "name": "   " });
    let response = setup_app()
        .oneshot(post_json("/cutter/resolve", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_resolve_missing_table() {
    let payload = serde_json::json!({ "name": "Yeats" });
    let response = setup_app()
        .oneshot(post_json("/cutter/resolve", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("\"y\""));
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn test_resolve_invalid_json() {
    let req = Request::builder()
        .uri("/cutter/resolve")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("invalid json"))
        .unwrap();

    let response = setup_app().oneshot(req).await.unwrap();
    // Axum's Json extractor returns 400 for malformed JSON
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_classify_standard_with_edition() {
    let payload = serde_json::json!({
        "item_type": "standard",
        "author": "Thompson",
        "edition": 2
    });
    let response = setup_app()
        .oneshot(post_json("/cutter/classify", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["code"], "T36.2");
    assert_eq!(body["base"], "T36");
}

#[tokio::test]
async fn test_classify_collected_poems_by_year() {
    let payload = serde_json::json!({
        "item_type": "literature-p",
        "author": "Shelley",
        "category": "collected-poems",
        "publication_year": 1987
    });
    let response = setup_app()
        .oneshot(post_json("/cutter/classify", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    // Shelley falls between Shakespeare (53) and Smith, J. (65)
    assert_eq!(body["code"], "S53.A17.F87");
    assert_eq!(body["category"], "collected-poems");
}

#[tokio::test]
async fn test_classify_specific_title() {
    let payload = serde_json::json!({
        "item_type": "literature-p",
        "author": "Shakespeare",
        "category": "specific-title",
        "title": "Hamlet"
    });
    let response = setup_app()
        .oneshot(post_json("/cutter/classify", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["code"], "S53.H36");
}

#[tokio::test]
async fn test_classify_editor_beats_year() {
    let payload = serde_json::json!({
        "item_type": "literature-p",
        "author": "Shakespeare",
        "category": "collected-essays",
        "editor": "Woolf",
        "publication_year": 1925
    });
    let response = setup_app()
        .oneshot(post_json("/cutter/classify", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["code"], "S53.A16.W66");
}

#[tokio::test]
async fn test_classify_motion_picture_refused() {
    let payload = serde_json::json!({
        "item_type": "motion-picture",
        "author": "Hitchcock"
    });
    let response = setup_app()
        .oneshot(post_json("/cutter/classify", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_classify_unknown_category_rejected() {
    let payload = serde_json::json!({
        "item_type": "literature-p",
        "author": "Shakespeare",
        "category": "limericks"
    });
    let response = setup_app()
        .oneshot(post_json("/cutter/classify", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_year_code_endpoint() {
    let response = setup_app().oneshot(get("/cutter/year/1987")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["code"], "F87");
    assert_eq!(body["year"], 1987);
}

#[tokio::test]
async fn test_list_categories() {
    let response = setup_app().oneshot(get("/cutter/categories")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let categories = body.as_array().unwrap();
    assert_eq!(categories.len(), 10);
    assert!(categories
        .iter()
        .any(|c| c["id"] == "correspondence" && c["prefix"] == "A14"));
}
