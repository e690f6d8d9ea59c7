use serde::{Deserialize, Serialize};

/// Flat, typed projection of a [`RawItem`](crate::RawItem).
///
/// Everything except `id` and `title` is optional and stays `None` when the
/// source field is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedItem {
    pub id: i64,
    pub title: String,
    pub state: Option<String>,
    pub work_item_type: Option<String>,
    pub tags: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub area_path: Option<String>,
    pub team_project: Option<String>,
    pub iteration_path: Option<String>,
    pub completed_work: Option<f64>,
    pub original_estimate: Option<f64>,
    pub start_date: Option<String>,
    pub finish_date: Option<String>,
    pub created_date: Option<String>,
    pub changed_date: Option<String>,
    pub closed_date: Option<String>,
    pub parent_id: Option<i64>,
    pub parent_link: Option<String>,
}
