mod models;
mod query;

use crate::NormalizedItem;

/// Normalized item with only the fields categorization cares about
pub(crate) fn item(id: i64, work_item_type: Option<&str>) -> NormalizedItem {
    NormalizedItem {
        id,
        title: format!("Item {id}"),
        state: None,
        work_item_type: work_item_type.map(String::from),
        tags: None,
        created_by: None,
        assigned_to: None,
        area_path: None,
        team_project: None,
        iteration_path: None,
        completed_work: None,
        original_estimate: None,
        start_date: None,
        finish_date: None,
        created_date: None,
        changed_date: None,
        closed_date: None,
        parent_id: None,
        parent_link: None,
    }
}
