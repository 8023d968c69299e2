#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use boulder_api::config::ServerConfig;
use boulder_api::router::build_app_router;
use boulder_api::state::AppState;
use boulder_core::catalog::Catalog;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        catalog_path: PathBuf::from("unused.json"),
    }
}

fn line(points: &[(f64, f64)]) -> Value {
    Value::Array(points.iter().map(|(x, y)| json!({"x": x, "y": y})).collect())
}

fn legacy_route(id: &str, name: &str, grade: &str, face_id: &str) -> Value {
    json!({
        "id": id, "name": name, "grade": grade, "cragId": "c1",
        "area": "主墙", "faceId": face_id,
        "topoLine": line(&[(0.2, 0.9), (0.3, 0.5), (0.4, 0.1)])
    })
}

/// Catalog fixture.
///
/// - crag `c1`, face `f1`: r1-r4 carry valid lines, r5 a single point
///   (5 siblings, 4 valid -> composite overlay is opt-in)
/// - crag `c1`, face `f2`: r6, r7 (2 valid siblings -> composite by default)
/// - r8: mapped to `f1` and `f2` through `topoAnnotations` only
/// - crag `c2`: r9 with no topo data
pub fn test_catalog_json() -> Value {
    let mut r5 = legacy_route("r5", "Sloper", "？", "f1");
    r5["topoLine"] = line(&[(0.5, 0.5)]);

    json!({
        "crags": [
            {"id": "c1", "name": "Baihe", "cityId": "beijing"},
            {"id": "c2", "name": "Yangshuo"}
        ],
        "faces": [
            {"id": "f1", "cragId": "c1", "area": "主墙", "imageUrl": "https://img.test/f1.jpg"},
            {"id": "f2", "cragId": "c1", "area": "东区"}
        ],
        "routes": [
            legacy_route("r1", "Moonwalk", "V3", "f1"),
            legacy_route("r2", "Moon Dance", "V5", "f1"),
            legacy_route("r3", "Blue Moon", "V1", "f1"),
            legacy_route("r4", "Crimp Fest", "V7", "f1"),
            r5,
            legacy_route("r6", "Arete", "V2", "f2"),
            legacy_route("r7", "Dyno", "V4", "f2"),
            {
                "id": "r8", "name": "Traverse", "grade": "V6", "cragId": "c1",
                "topoAnnotations": [
                    {"faceId": "f1", "area": "主墙", "topoLine": line(&[(0.1, 0.8), (0.9, 0.8)])},
                    {"faceId": "f2", "area": "东区", "topoLine": line(&[(0.1, 0.6), (0.9, 0.6)]), "topoTension": 0.4}
                ]
            },
            {"id": "r9", "name": "Karst", "grade": "V8", "cragId": "c2"}
        ]
    })
}

pub fn test_catalog() -> Catalog {
    let bytes = serde_json::to_vec(&test_catalog_json()).unwrap();
    Catalog::from_json_slice(&bytes).unwrap()
}

/// Build the full application router with all middleware layers over the
/// test catalog.
pub fn build_test_app() -> Router {
    let config = test_config();
    let state = AppState {
        catalog: Arc::new(test_catalog()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
