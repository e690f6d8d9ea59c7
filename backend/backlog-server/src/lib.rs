pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod service;

#[cfg(test)]
mod tests;

pub use api::{
    backlog::{
        backlog::{backlog_diagnostics, create_backlog, get_backlog},
        backlog_query::BacklogQuery,
        backlog_request::BacklogRequest,
        diagnostics_query::DiagnosticsQuery,
        diagnostics_response::{DiagnosticsResponse, DiagnosticsSample},
    },
    error::ApiError,
    error::Result as ApiResult,
    projects::{projects::list_projects, projects_query::ProjectsQuery},
};
pub use app_state::AppState;
pub use service::backlog_service::BacklogService;

pub use crate::routes::build_router;
