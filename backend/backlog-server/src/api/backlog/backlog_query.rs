use crate::BacklogRequest;

use backlog_core::FilterSet;

use serde::Deserialize;

/// Query parameters for GET /backlog
///
/// List-valued filters arrive comma-separated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BacklogQuery {
    pub organization: Option<String>,
    pub project_name: Option<String>,
    pub pat: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub work_item_types: Option<String>,
    pub states: Option<String>,
    pub area_paths: Option<String>,
    pub iteration_paths: Option<String>,
    pub assigned_to: Option<String>,
    pub tags: Option<String>,
}

impl BacklogQuery {
    /// Filters built from the individual parameters; `None` when none was given
    pub fn filters(&self) -> Option<FilterSet> {
        let filters = FilterSet {
            work_item_types: FilterSet::split_list(self.work_item_types.as_deref()),
            states: FilterSet::split_list(self.states.as_deref()),
            area_paths: FilterSet::split_list(self.area_paths.as_deref()),
            iteration_paths: FilterSet::split_list(self.iteration_paths.as_deref()),
            assigned_to: FilterSet::split_list(self.assigned_to.as_deref()),
            tags: self
                .tags
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from),
        };

        if filters.is_empty() { None } else { Some(filters) }
    }
}

impl From<BacklogQuery> for BacklogRequest {
    fn from(query: BacklogQuery) -> Self {
        let filters = query.filters();

        BacklogRequest {
            organization: query.organization,
            project_name: query.project_name,
            pat: query.pat,
            start_date: query.start_date,
            end_date: query.end_date,
            year: query.year,
            month: query.month,
            filters,
        }
    }
}
