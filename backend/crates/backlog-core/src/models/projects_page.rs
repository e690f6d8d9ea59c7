use crate::ProjectSummary;

use serde::{Deserialize, Serialize};

/// One page of the projects listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectsPage {
    /// Number of projects on this page
    pub count: usize,
    /// Total reported by the remote platform, when it reports one
    pub total_count: Option<i64>,
    pub projects: Vec<ProjectSummary>,
    pub continuation_token: Option<String>,
    pub has_more: bool,
}

impl ProjectsPage {
    pub fn new(
        projects: Vec<ProjectSummary>,
        total_count: Option<i64>,
        continuation_token: Option<String>,
    ) -> Self {
        Self {
            count: projects.len(),
            total_count,
            projects,
            has_more: continuation_token.is_some(),
            continuation_token,
        }
    }
}
