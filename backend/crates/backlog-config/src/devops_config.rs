use crate::{ConfigError, ConfigErrorResult, DEFAULT_API_URL, DEFAULT_API_VERSION};

use std::fmt;

use http::Uri;
use serde::Deserialize;

/// Remote platform defaults. Request values take precedence over these.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct DevOpsConfig {
    /// Default personal access token
    pub pat: Option<String>,
    pub organization: Option<String>,
    pub project: Option<String>,
    /// Base URL of the REST API (organization is appended as the first path segment)
    pub api_url: String,
    pub api_version: String,
}

impl Default for DevOpsConfig {
    fn default() -> Self {
        Self {
            pat: None,
            organization: None,
            project: None,
            api_url: String::from(DEFAULT_API_URL),
            api_version: String::from(DEFAULT_API_VERSION),
        }
    }
}

impl fmt::Debug for DevOpsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DevOpsConfig")
            .field("pat", &self.pat.as_ref().map(|_| "[REDACTED]"))
            .field("organization", &self.organization)
            .field("project", &self.project)
            .field("api_url", &self.api_url)
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl DevOpsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let uri: Uri = self.api_url.parse().map_err(|e| {
            ConfigError::devops(format!(
                "devops.api_url '{}' is not a valid URL: {}",
                self.api_url, e
            ))
        })?;

        if uri.scheme().is_none() || uri.host().is_none() {
            return Err(ConfigError::devops(format!(
                "devops.api_url '{}' must be an absolute URL",
                self.api_url
            )));
        }

        if self.api_version.trim().is_empty() {
            return Err(ConfigError::devops("devops.api_version must not be empty"));
        }

        Ok(())
    }

    /// Default PAT, treating an empty value as absent
    pub fn default_pat(&self) -> Option<&str> {
        non_empty(&self.pat)
    }

    /// Default organization, treating an empty value as absent
    pub fn default_organization(&self) -> Option<&str> {
        non_empty(&self.organization)
    }

    /// Default project, treating an empty value as absent
    pub fn default_project(&self) -> Option<&str> {
        non_empty(&self.project)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
