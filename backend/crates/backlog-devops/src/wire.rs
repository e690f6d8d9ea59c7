//! Response envelopes as the remote platform sends them.

use backlog_core::{ProjectSummary, RawItem};

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct WiqlRequest<'a> {
    pub query: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WiqlResponse {
    #[serde(default)]
    pub work_items: Vec<WorkItemReference>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WorkItemReference {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WorkItemsEnvelope {
    #[serde(default)]
    pub value: Vec<RawItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectsEnvelope {
    #[serde(default)]
    pub count: Option<i64>,
    #[serde(default)]
    pub value: Vec<RawProject>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawProject {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub state: Option<String>,
    pub revision: Option<i64>,
    pub visibility: Option<String>,
    pub last_update_time: Option<String>,
}

impl From<RawProject> for ProjectSummary {
    fn from(p: RawProject) -> Self {
        Self {
            id: p.id.unwrap_or_default(),
            name: p.name.unwrap_or_default(),
            description: p.description,
            url: p.url,
            state: p.state,
            revision: p.revision,
            visibility: p.visibility,
            last_update_time: p.last_update_time,
        }
    }
}
