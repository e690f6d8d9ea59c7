use backlog_core::NormalizedItem;

use std::collections::BTreeMap;

use serde::Serialize;

/// Unfiltered overview of a project's work items
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticsResponse {
    pub organization: String,
    pub project: String,
    pub total_items: usize,
    /// Items per work item type; items without a type count under `(none)`
    pub type_counts: BTreeMap<String, usize>,
    pub sample: Vec<DiagnosticsSample>,
    pub sample_size: usize,
}

/// Sample entry: the normalized item plus its browser link
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticsSample {
    #[serde(flatten)]
    pub item: NormalizedItem,
    pub web_url: String,
}
