use crate::ApiError;

use serde::Deserialize;

pub const DEFAULT_TOP: i64 = 100;
pub const MAX_TOP: i64 = 500;

/// Query parameters for GET /projects
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectsQuery {
    pub organization: Option<String>,
    pub pat: Option<String>,
    pub top: Option<i64>,
    pub skip: Option<i64>,
    pub continuation_token: Option<String>,
}

impl ProjectsQuery {
    /// Page size, 1-500, default 100
    #[track_caller]
    pub fn top(&self) -> Result<u32, ApiError> {
        let top = self.top.unwrap_or(DEFAULT_TOP);
        if !(1..=MAX_TOP).contains(&top) {
            return Err(ApiError::validation(
                format!("top must be between 1 and {MAX_TOP}, got {top}"),
                Some("top"),
            ));
        }
        u32::try_from(top).map_err(|_| ApiError::validation("top is out of range", Some("top")))
    }

    /// Projects to skip, default 0
    #[track_caller]
    pub fn skip(&self) -> Result<u32, ApiError> {
        let skip = self.skip.unwrap_or(0);
        if skip < 0 {
            return Err(ApiError::validation(
                format!("skip must be 0 or greater, got {skip}"),
                Some("skip"),
            ));
        }
        u32::try_from(skip).map_err(|_| ApiError::validation("skip is too large", Some("skip")))
    }

    /// Continuation token, treating an empty value as absent
    pub fn continuation_token(&self) -> Option<&str> {
        self.continuation_token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
    }
}
