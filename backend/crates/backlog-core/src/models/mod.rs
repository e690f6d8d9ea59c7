pub mod backlog_result;
pub mod date_range;
pub mod filter_set;
pub mod identity_field;
pub mod normalized_item;
pub mod project_summary;
pub mod projects_page;
pub mod raw_item;
