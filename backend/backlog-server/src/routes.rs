use crate::{AppState, backlog_diagnostics, create_backlog, get_backlog, health, list_projects};

use backlog_config::ServerConfig;

use axum::{
    Router,
    http::HeaderValue,
    routing::get,
};
use log::warn;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server);

    Router::new()
        // Health check endpoints
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        // Backlog endpoints
        .route("/backlog", get(get_backlog).post(create_backlog))
        .route("/backlog/diagnostics", get(backlog_diagnostics))
        // Project endpoints
        .route("/projects", get(list_projects))
        // Add shared state
        .with_state(state)
        .layer(cors)
}

/// CORS from the configured origin list; `*` allows any origin
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origin = if server.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = server
            .cors_origins
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", o);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
