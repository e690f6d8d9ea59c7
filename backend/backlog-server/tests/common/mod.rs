#![allow(dead_code)]

//! Test infrastructure for backlog-server API tests

use backlog_config::Config;
use backlog_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::MockServer;

pub const ORG: &str = "org";
pub const PAT: &str = "test-pat";

/// Config pointing the remote client at the mock server, with default credentials
pub fn test_config(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.devops.api_url = server.uri();
    config.devops.organization = Some(ORG.to_string());
    config.devops.pat = Some(PAT.to_string());
    config
}

pub fn test_router(config: Config) -> Router {
    build_router(AppState::new(config))
}

/// Send a request through the router and decode the JSON body
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Raw work item as the remote platform returns it
pub fn work_item(id: i64, work_item_type: &str) -> Value {
    json!({
        "id": id,
        "fields": {
            "System.Title": format!("Item {id}"),
            "System.WorkItemType": work_item_type,
            "System.State": "Active",
            "System.CreatedDate": "2024-02-10T09:00:00.000Z",
            "System.CreatedBy": {"displayName": "Ada Lovelace"}
        }
    })
}
