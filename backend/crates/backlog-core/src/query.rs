//! WIQL construction.
//!
//! Filter values are interpolated inside single quotes exactly as received.
//! The remote query language has no parameter binding for these clauses, so
//! a value containing `'` changes the query; such values are logged at warn
//! level and still passed through unchanged.

use crate::{DateRange, FilterSet};

use log::warn;

pub const FIELD_ID: &str = "[System.Id]";
pub const FIELD_TEAM_PROJECT: &str = "[System.TeamProject]";
pub const FIELD_CREATED_DATE: &str = "[System.CreatedDate]";
pub const FIELD_WORK_ITEM_TYPE: &str = "[System.WorkItemType]";
pub const FIELD_STATE: &str = "[System.State]";
pub const FIELD_AREA_PATH: &str = "[System.AreaPath]";
pub const FIELD_ITERATION_PATH: &str = "[System.IterationPath]";
pub const FIELD_ASSIGNED_TO: &str = "[System.AssignedTo]";
pub const FIELD_TAGS: &str = "[System.Tags]";

/// Build the full WIQL statement for a backlog query.
///
/// The project clause is always present. Results are ordered newest first.
pub fn build_wiql(
    project: &str,
    range: Option<&DateRange>,
    filters: Option<&FilterSet>,
) -> String {
    let mut clauses = vec![format!("{FIELD_TEAM_PROJECT} = {}", quote(project))];

    if let Some(range) = range {
        if let Some(start) = range.start_str() {
            clauses.push(format!("{FIELD_CREATED_DATE} >= '{start}'"));
        }
        if let Some(end) = range.end_str() {
            clauses.push(format!("{FIELD_CREATED_DATE} <= '{end}'"));
        }
    }

    if let Some(filters) = filters {
        clauses.extend(filter_clauses(filters));
    }

    format!(
        "SELECT {FIELD_ID} FROM WorkItems WHERE {} ORDER BY {FIELD_CREATED_DATE} DESC",
        clauses.join(" AND ")
    )
}

/// Clauses contributed by a filter set, in a fixed category order.
///
/// Area and iteration paths match hierarchically, so each path gets its own
/// `UNDER` clause instead of joining an `IN` list.
pub fn filter_clauses(filters: &FilterSet) -> Vec<String> {
    let mut clauses = Vec::new();

    if let Some(types) = non_empty(&filters.work_item_types) {
        clauses.push(format!("{FIELD_WORK_ITEM_TYPE} IN ({})", quoted_list(types)));
    }

    if let Some(states) = non_empty(&filters.states) {
        clauses.push(format!("{FIELD_STATE} IN ({})", quoted_list(states)));
    }

    if let Some(areas) = non_empty(&filters.area_paths) {
        clauses.extend(
            areas
                .iter()
                .map(|area| format!("{FIELD_AREA_PATH} UNDER {}", quote(area))),
        );
    }

    if let Some(iterations) = non_empty(&filters.iteration_paths) {
        clauses.extend(
            iterations
                .iter()
                .map(|it| format!("{FIELD_ITERATION_PATH} UNDER {}", quote(it))),
        );
    }

    if let Some(users) = non_empty(&filters.assigned_to) {
        clauses.push(format!("{FIELD_ASSIGNED_TO} IN ({})", quoted_list(users)));
    }

    if let Some(tag) = filters.tag() {
        clauses.push(format!("{FIELD_TAGS} CONTAINS {}", quote(tag)));
    }

    clauses
}

fn non_empty(list: &Option<Vec<String>>) -> Option<&[String]> {
    list.as_deref().filter(|values| !values.is_empty())
}

fn quoted_list(values: &[String]) -> String {
    values
        .iter()
        .map(|v| quote(v))
        .collect::<Vec<_>>()
        .join(", ")
}

fn quote(value: &str) -> String {
    if value.contains('\'') {
        warn!("WIQL value contains a single quote and is interpolated unescaped");
    }
    format!("'{value}'")
}
