pub mod backlog;
pub mod backlog_query;
pub mod backlog_request;
pub mod diagnostics_query;
pub mod diagnostics_response;
