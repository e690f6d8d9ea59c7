use serde::Deserialize;

/// Query parameters for GET /backlog/diagnostics
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiagnosticsQuery {
    pub project_name: Option<String>,
    pub organization: Option<String>,
    pub pat: Option<String>,
}
