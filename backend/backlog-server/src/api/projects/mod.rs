pub mod projects;
pub mod projects_query;
