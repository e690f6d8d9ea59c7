use crate::ApiError;

use backlog_config::DevOpsConfig;

use std::fmt;

/// Organization and PAT for one request, request values first
#[derive(Clone)]
pub struct Credentials {
    pub organization: String,
    pub pat: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("organization", &self.organization)
            .field("pat", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    /// Resolve from the request, else the configured defaults.
    ///
    /// Empty values count as absent.
    #[track_caller]
    pub fn resolve(
        organization: Option<&str>,
        pat: Option<&str>,
        defaults: &DevOpsConfig,
    ) -> Result<Self, ApiError> {
        let organization = non_empty(organization)
            .or_else(|| defaults.default_organization())
            .ok_or_else(|| {
                ApiError::config(
                    "organization must be provided in the request or configured via AZURE_DEVOPS_ORGANIZATION",
                )
            })?;

        let pat = non_empty(pat)
            .or_else(|| defaults.default_pat())
            .ok_or_else(|| {
                ApiError::config(
                    "Personal Access Token must be provided in the request or configured via AZURE_DEVOPS_PAT",
                )
            })?;

        Ok(Self {
            organization: organization.to_string(),
            pat: pat.to_string(),
        })
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
