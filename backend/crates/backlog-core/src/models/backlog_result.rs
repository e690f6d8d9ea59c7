use crate::{DateRange, FilterSet, NormalizedItem};

use serde::{Deserialize, Serialize};

const NONE: &str = "none";

/// Echoed request parameters plus derived counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacklogMetadata {
    pub start_date: String,
    pub end_date: String,
    pub organization: String,
    pub project: String,
    pub filters: String,
    pub total_parents: usize,
    pub total_children: usize,
}

impl BacklogMetadata {
    pub fn new(
        organization: &str,
        project: &str,
        range: Option<&DateRange>,
        filters: Option<&FilterSet>,
    ) -> Self {
        Self {
            start_date: range
                .and_then(DateRange::start_str)
                .unwrap_or_else(|| String::from(NONE)),
            end_date: range
                .and_then(DateRange::end_str)
                .unwrap_or_else(|| String::from(NONE)),
            organization: organization.to_string(),
            project: project.to_string(),
            filters: filters
                .map(FilterSet::summarize)
                .unwrap_or_else(|| String::from(NONE)),
            total_parents: 0,
            total_children: 0,
        }
    }
}

/// Backlog split into parent and child items, in fetch order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacklogResult {
    pub total_items: usize,
    pub parents: Vec<NormalizedItem>,
    pub children: Vec<NormalizedItem>,
    pub metadata: BacklogMetadata,
}

impl BacklogResult {
    /// Assemble a result; totals are always derived from the two buckets.
    pub fn new(
        parents: Vec<NormalizedItem>,
        children: Vec<NormalizedItem>,
        mut metadata: BacklogMetadata,
    ) -> Self {
        metadata.total_parents = parents.len();
        metadata.total_children = children.len();

        Self {
            total_items: parents.len() + children.len(),
            parents,
            children,
            metadata,
        }
    }

    pub fn empty(metadata: BacklogMetadata) -> Self {
        Self::new(Vec::new(), Vec::new(), metadata)
    }
}
