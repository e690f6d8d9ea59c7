pub mod backlog;
pub mod error;
pub mod projects;
