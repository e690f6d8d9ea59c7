use crate::NormalizedItem;

/// Work item types that land in the `parents` bucket
pub const PARENT_TYPES: [&str; 4] = ["Epic", "Feature", "User Story", "Product Backlog Item"];

pub fn is_parent_type(work_item_type: Option<&str>) -> bool {
    work_item_type.is_some_and(|t| PARENT_TYPES.contains(&t))
}

/// Stable split into `(parents, children)`.
///
/// Items with an unknown or missing type are children.
pub fn categorize(items: Vec<NormalizedItem>) -> (Vec<NormalizedItem>, Vec<NormalizedItem>) {
    items
        .into_iter()
        .partition(|item| is_parent_type(item.work_item_type.as_deref()))
}
