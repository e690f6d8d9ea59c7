mod backlog_result;
mod date_range;
mod filter_set;
mod identity_field;
mod projects_page;
