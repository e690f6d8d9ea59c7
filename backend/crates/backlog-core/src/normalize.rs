//! RawItem → NormalizedItem projection.

use crate::dates::format_display_date;
use crate::{IdentityField, NormalizedItem, RawItem, RawRelation};

use log::warn;

/// Relation type marking a link to the item's parent
pub const PARENT_RELATION: &str = "System.LinkTypes.Hierarchy-Reverse";

pub mod field {
    pub const TITLE: &str = "System.Title";
    pub const STATE: &str = "System.State";
    pub const WORK_ITEM_TYPE: &str = "System.WorkItemType";
    pub const TAGS: &str = "System.Tags";
    pub const CREATED_BY: &str = "System.CreatedBy";
    pub const ASSIGNED_TO: &str = "System.AssignedTo";
    pub const AREA_PATH: &str = "System.AreaPath";
    pub const TEAM_PROJECT: &str = "System.TeamProject";
    pub const ITERATION_PATH: &str = "System.IterationPath";
    pub const COMPLETED_WORK: &str = "Microsoft.VSTS.Scheduling.CompletedWork";
    pub const ORIGINAL_ESTIMATE: &str = "Microsoft.VSTS.Scheduling.OriginalEstimate";
    pub const START_DATE: &str = "Microsoft.VSTS.Scheduling.StartDate";
    pub const FINISH_DATE: &str = "Microsoft.VSTS.Scheduling.FinishDate";
    pub const CREATED_DATE: &str = "System.CreatedDate";
    pub const CHANGED_DATE: &str = "System.ChangedDate";
    pub const CLOSED_DATE: &str = "Microsoft.VSTS.Common.ClosedDate";
}

pub fn normalize_item(raw: &RawItem) -> NormalizedItem {
    let (parent_id, parent_link) = extract_parent(raw.relations.as_deref());
    let date = |name: &str| format_display_date(raw.field(name).and_then(|v| v.as_str()));
    let identity = |name: &str| IdentityField::decode(raw.field(name)).display_name();

    NormalizedItem {
        id: raw.id,
        title: raw.str_field(field::TITLE).unwrap_or_default(),
        state: raw.str_field(field::STATE),
        work_item_type: raw.str_field(field::WORK_ITEM_TYPE),
        tags: raw.str_field(field::TAGS),
        created_by: identity(field::CREATED_BY),
        assigned_to: identity(field::ASSIGNED_TO),
        area_path: raw.str_field(field::AREA_PATH),
        team_project: raw.str_field(field::TEAM_PROJECT),
        iteration_path: raw.str_field(field::ITERATION_PATH),
        completed_work: raw.f64_field(field::COMPLETED_WORK),
        original_estimate: raw.f64_field(field::ORIGINAL_ESTIMATE),
        start_date: date(field::START_DATE),
        finish_date: date(field::FINISH_DATE),
        created_date: date(field::CREATED_DATE),
        changed_date: date(field::CHANGED_DATE),
        closed_date: date(field::CLOSED_DATE),
        parent_id,
        parent_link,
    }
}

/// Parent id and link from the first reverse-hierarchy relation.
///
/// Later matching relations are ignored. A matching relation without a URL,
/// or whose last path segment is not an integer, yields no parent.
pub fn extract_parent(relations: Option<&[RawRelation]>) -> (Option<i64>, Option<String>) {
    let Some(url) = relations
        .unwrap_or_default()
        .iter()
        .find(|r| r.rel.as_deref() == Some(PARENT_RELATION))
        .and_then(|r| r.url.as_deref())
        .filter(|url| !url.is_empty())
    else {
        return (None, None);
    };

    let segment = url.rsplit('/').next().unwrap_or_default();
    match segment.parse::<i64>() {
        Ok(parent_id) => (Some(parent_id), Some(url.to_string())),
        Err(_) => {
            warn!("Parent relation URL has no numeric id segment: {}", url);
            (None, None)
        }
    }
}

/// Browser URL for a work item
pub fn work_item_web_url(id: i64, organization: &str, project: &str) -> String {
    format!("https://dev.azure.com/{organization}/{project}/_workitems/edit/{id}")
}
