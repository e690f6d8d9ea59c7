use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use serde_json::json;

/// GET / - Service banner
pub async fn root() -> Response {
    let banner = json!({
        "message": "Backlog API",
        "status": "online",
        "docs": ["/health", "/backlog", "/backlog/diagnostics", "/projects"],
    });

    (StatusCode::OK, Json(banner)).into_response()
}

/// GET /health - Health check
pub async fn health_check() -> Response {
    let health = json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}
