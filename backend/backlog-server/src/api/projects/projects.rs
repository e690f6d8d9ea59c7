//! Project REST API handlers

use crate::{ApiResult, AppState, BacklogService, ProjectsQuery};

use backlog_core::ProjectsPage;

use axum::{
    Json,
    extract::{Query, State},
};

/// GET /projects
///
/// One page of projects; follow `continuation_token` while `has_more` is set
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectsQuery>,
) -> ApiResult<Json<ProjectsPage>> {
    let page = BacklogService::new(&state).list_projects(query).await?;
    Ok(Json(page))
}
