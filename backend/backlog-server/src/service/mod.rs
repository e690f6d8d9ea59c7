pub mod backlog_service;
pub mod credentials;
