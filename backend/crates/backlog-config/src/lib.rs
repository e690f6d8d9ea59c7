mod backlog_config;
mod config;
mod devops_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use backlog_config::BacklogConfig;
pub use config::Config;
pub use devops_config::DevOpsConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_CORS_ORIGIN: &str = "*";
const DEFAULT_API_URL: &str = "https://dev.azure.com";
const DEFAULT_API_VERSION: &str = "7.0";
const DEFAULT_BATCH_SIZE: usize = 200;
const MIN_BATCH_SIZE: usize = 1;
const MAX_BATCH_SIZE: usize = 200;
const DEFAULT_MAX_RESULTS: u32 = 20_000;
const MIN_MAX_RESULTS: u32 = 1;
const MAX_MAX_RESULTS: u32 = 20_000;
const DEFAULT_DIAGNOSTICS_SAMPLE: usize = 10;
const MIN_DIAGNOSTICS_SAMPLE: usize = 1;
const MAX_DIAGNOSTICS_SAMPLE: usize = 100;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
