use backlog_config::Config;

use std::sync::Arc;

/// Shared state handed to every handler.
///
/// Configuration is loaded once at startup; the HTTP client keeps one
/// connection pool for all outbound calls.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            http: reqwest::Client::new(),
        }
    }
}
