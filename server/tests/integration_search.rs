use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use recipe_core::sample::sample_recipes;
use recipe_core::{EngineConfig, RecipeService};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let service = RecipeService::new(sample_recipes(), EngineConfig::default());
    recipe_server::build_app(Arc::new(service))
}

async fn call(app: Router, uri: &str) -> (StatusCode, Bytes) {
    let req = Request::get(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    (status, body)
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = call(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"ok");
}

#[tokio::test]
async fn search_returns_ranked_recipes() {
    let (status, body) = call(app(), "/search?query=recipe%20for%20chicken%20curry").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["intent"], "request_recipe");
    assert_eq!(json["search_query"], "chicken curry");
    let arr = json["recipes"].as_array().unwrap();
    assert_eq!(arr.len(), 3);
    assert_eq!(arr[0]["name"], "Chicken Curry");
    assert_eq!(arr[0]["cook_time"], 40);
    assert!(arr[0]["ingredients"].as_array().unwrap().len() > 1);
    assert!(arr[0]["instructions"].as_array().unwrap().len() > 1);
    assert!(arr[0]["match_score"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn search_reports_constraints() {
    let (_, body) = call(app(), "/search?query=quick%20soup%20under%2040%20minutes&k=10").await;
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["constraints"]["max_time"], 30);
    let arr = json["recipes"].as_array().unwrap();
    assert!(!arr.is_empty());
    for r in arr {
        assert!(r["cook_time"].as_u64().unwrap() <= 30);
    }
}

#[tokio::test]
async fn unsatisfiable_include_falls_back() {
    // "with no cream" reads as an inclusion of "no cream", which nothing contains
    let (_, body) = call(app(), "/search?query=soup%20with%20no%20cream&k=10").await;
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["constraints"]["exclude_ingredients"][0], "cream");
    assert_eq!(json["constraints"]["include_ingredients"][0], "no cream");
    assert_eq!(json["recipes"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn missing_query_is_empty_search() {
    let (status, body) = call(app(), "/search").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["search_query"], "");
    assert!(json["constraints"].as_object().unwrap().is_empty());
    assert_eq!(json["recipes"][0]["name"], "Spaghetti Carbonara");
}
