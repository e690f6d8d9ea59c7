use backlog_core::FilterSet;

use serde::Deserialize;

/// Body of POST /backlog
///
/// `organization`, `project_name` and `pat` fall back to configured defaults.
/// Explicit dates win over `year`/`month`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BacklogRequest {
    pub organization: Option<String>,
    pub project_name: Option<String>,
    pub pat: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub filters: Option<FilterSet>,
}
