// HTTP API tests through the public router.
//
// Drives the full middleware stack with tower's oneshot, the same way a
// browser client would hit the server.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use pretty_assertions::assert_eq;
use serde_json::Value;
use tower::ServiceExt;
use visigen_server::{create_app, AppState, ServerConfig};

fn app_with(config: ServerConfig) -> Router {
    create_app(AppState::new(config).unwrap())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

fn analyze_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn timeline_content_round_trip() {
    let app = app_with(ServerConfig::default());
    let (status, json) = send(
        app,
        analyze_request(serde_json::json!({
            "content": "First we designed the prototype. Then we tested it in 2023. Finally we shipped in 2024.",
            "type": "text",
            "metadata": { "title": "Project History" }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let approaches: Vec<&str> = json["smartAnalysis"]["approaches"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|a| a["id"].as_str())
        .collect();
    assert!(approaches.contains(&"timeline"), "{approaches:?}");

    let timeline = json["suggestions"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["visualType"] == "timeline")
        .unwrap();
    assert_eq!(timeline["elements"][0]["content"]["value"], "Project History");
    assert_eq!(timeline["elements"][1]["type"], "timeline");
}

#[tokio::test]
async fn trivial_content_gets_standard_suggestion() {
    let app = app_with(ServerConfig::default());
    let (status, json) = send(app, analyze_request(serde_json::json!({ "content": "hi ok" }))).await;

    assert_eq!(status, StatusCode::OK);
    let suggestions = json["suggestions"].as_array().unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0]["id"], "suggestion-standard");
    assert_eq!(suggestions[0]["confidence"], 0.5);
    assert!(json["smartAnalysis"].get("recommendedApproach").is_none());
}

#[tokio::test]
async fn cached_server_returns_same_analysis() {
    let app = app_with(ServerConfig::default());
    let body = serde_json::json!({ "content": "Costs fell 12% because of automation." });

    let (_, first) = send(app.clone(), analyze_request(body.clone())).await;
    let (_, second) = send(app, analyze_request(body)).await;
    assert_eq!(first["id"], second["id"]);
}

#[tokio::test]
async fn uncached_server_returns_fresh_ids() {
    let app = app_with(ServerConfig {
        cache_enabled: false,
        ..Default::default()
    });
    let body = serde_json::json!({ "content": "Costs fell 12% because of automation." });

    let (_, first) = send(app.clone(), analyze_request(body.clone())).await;
    let (_, second) = send(app, analyze_request(body)).await;
    assert_ne!(first["id"], second["id"]);
    assert_eq!(first["smartAnalysis"], second["smartAnalysis"]);
}

#[tokio::test]
async fn external_provider_config_still_serves() {
    let app = app_with(ServerConfig {
        provider: visigen_core::ProviderKind::External,
        provider_endpoint: Some("http://localhost:9".into()),
        ..Default::default()
    });
    let (status, json) = send(app, analyze_request(serde_json::json!({ "content": "hi ok" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["suggestions"][0]["visualType"], "standard");
}

#[tokio::test]
async fn blank_content_is_rejected() {
    let app = app_with(ServerConfig::default());
    let (status, json) = send(app, analyze_request(serde_json::json!({ "content": "" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid content");
}
