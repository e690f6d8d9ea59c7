mod backlog_query;
mod error;
mod projects_query;
