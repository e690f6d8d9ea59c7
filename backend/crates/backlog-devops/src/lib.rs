//! Client for the remote work-tracking REST API
//!
//! Covers the three calls the backlog service needs: project listing,
//! WIQL id queries and batched work item detail retrieval.

pub(crate) mod auth;
pub(crate) mod client;
pub(crate) mod wire;


pub use auth::auth_headers;
pub use client::{ClientOptions, DevOpsClient, DevOpsError, DevOpsResult};
