use serde::{Deserialize, Serialize};

/// Project entry returned by the projects listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub state: Option<String>,
    pub revision: Option<i64>,
    pub visibility: Option<String>,
    pub last_update_time: Option<String>,
}
