//! Backlog REST API handlers

use crate::{
    ApiResult, AppState, BacklogQuery, BacklogRequest, BacklogService, DiagnosticsQuery,
    DiagnosticsResponse,
};

use backlog_core::BacklogResult;

use axum::{
    Json,
    extract::{Query, State},
};

// =============================================================================
// Handlers
// =============================================================================

/// POST /backlog
///
/// Backlog for a project, split into parents and children
pub async fn create_backlog(
    State(state): State<AppState>,
    Json(request): Json<BacklogRequest>,
) -> ApiResult<Json<BacklogResult>> {
    let result = BacklogService::new(&state).fetch_backlog(request).await?;
    Ok(Json(result))
}

/// GET /backlog
///
/// Same as POST /backlog with every field passed as a query parameter
pub async fn get_backlog(
    State(state): State<AppState>,
    Query(query): Query<BacklogQuery>,
) -> ApiResult<Json<BacklogResult>> {
    let result = BacklogService::new(&state)
        .fetch_backlog(BacklogRequest::from(query))
        .await?;
    Ok(Json(result))
}

/// GET /backlog/diagnostics
///
/// Per-type counts and a small sample of every work item in the project
pub async fn backlog_diagnostics(
    State(state): State<AppState>,
    Query(query): Query<DiagnosticsQuery>,
) -> ApiResult<Json<DiagnosticsResponse>> {
    let response = BacklogService::new(&state).diagnostics(query).await?;
    Ok(Json(response))
}
