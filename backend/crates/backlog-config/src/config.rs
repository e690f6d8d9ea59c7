use crate::{
    BacklogConfig, ConfigError, ConfigErrorResult, DevOpsConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub devops: DevOpsConfig,
    pub backlog: BacklogConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for BACKLOG_CONFIG_DIR env var, else use ./.backlog/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: BACKLOG_CONFIG_DIR env var > ./.backlog/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("BACKLOG_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".backlog"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    ///
    /// A missing default PAT is not an error: requests may carry their own.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.devops.validate()?;
        self.backlog.validate()?;

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  cors: {}", self.server.cors_origins.join(","));
        info!(
            "  devops: {} (api-version {})",
            self.devops.api_url, self.devops.api_version
        );
        info!(
            "  defaults: organization={}, project={}, pat={}",
            if self.devops.default_organization().is_some() {
                "set"
            } else {
                "unset"
            },
            if self.devops.default_project().is_some() {
                "set"
            } else {
                "unset"
            },
            if self.devops.default_pat().is_some() {
                "set"
            } else {
                "unset"
            }
        );
        info!(
            "  backlog: batch={}, max_results={}, open_ended={}, diagnostics_sample={}",
            self.backlog.batch_size,
            self.backlog.max_results,
            self.backlog.open_ended_queries,
            self.backlog.diagnostics_sample_size
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );

        if self.devops.default_pat().is_none() {
            warn!("No default PAT configured (AZURE_DEVOPS_PAT); every request must supply one");
        }
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("API_HOST", &mut self.server.host);
        Self::apply_env_parse("API_PORT", &mut self.server.port);
        if let Ok(val) = std::env::var("CORS_ORIGINS") {
            self.server.cors_origins = ServerConfig::parse_origins(&val);
        }

        // Remote platform
        Self::apply_env_option_string("AZURE_DEVOPS_PAT", &mut self.devops.pat);
        Self::apply_env_option_string("AZURE_DEVOPS_ORGANIZATION", &mut self.devops.organization);
        Self::apply_env_option_string("AZURE_DEVOPS_PROJECT", &mut self.devops.project);
        Self::apply_env_string("AZURE_DEVOPS_API_URL", &mut self.devops.api_url);
        Self::apply_env_string("AZURE_DEVOPS_API_VERSION", &mut self.devops.api_version);

        // Backlog
        Self::apply_env_parse("BACKLOG_BATCH_SIZE", &mut self.backlog.batch_size);
        Self::apply_env_parse("BACKLOG_MAX_RESULTS", &mut self.backlog.max_results);
        Self::apply_env_bool("BACKLOG_OPEN_ENDED", &mut self.backlog.open_ended_queries);
        Self::apply_env_parse(
            "BACKLOG_DIAGNOSTICS_SAMPLE",
            &mut self.backlog.diagnostics_sample_size,
        );

        // Logging
        Self::apply_env_parse("BACKLOG_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("BACKLOG_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("BACKLOG_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
