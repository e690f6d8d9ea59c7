use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BATCH_SIZE, DEFAULT_DIAGNOSTICS_SAMPLE,
    DEFAULT_MAX_RESULTS, MAX_BATCH_SIZE, MAX_DIAGNOSTICS_SAMPLE, MAX_MAX_RESULTS, MIN_BATCH_SIZE,
    MIN_DIAGNOSTICS_SAMPLE, MIN_MAX_RESULTS,
};

use serde::Deserialize;

/// Backlog query behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BacklogConfig {
    /// Work item ids per detail request
    pub batch_size: usize,
    /// Ceiling on ids returned by a single WIQL query
    pub max_results: u32,
    /// When no dates and no year/month are given: true = no date constraint,
    /// false = current calendar month
    pub open_ended_queries: bool,
    /// Items included in the diagnostics sample
    pub diagnostics_sample_size: usize,
}

impl Default for BacklogConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            max_results: DEFAULT_MAX_RESULTS,
            open_ended_queries: false,
            diagnostics_sample_size: DEFAULT_DIAGNOSTICS_SAMPLE,
        }
    }
}

impl BacklogConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_BATCH_SIZE..=MAX_BATCH_SIZE).contains(&self.batch_size) {
            return Err(ConfigError::backlog(format!(
                "backlog.batch_size must be {}-{}, got {}",
                MIN_BATCH_SIZE, MAX_BATCH_SIZE, self.batch_size
            )));
        }

        if !(MIN_MAX_RESULTS..=MAX_MAX_RESULTS).contains(&self.max_results) {
            return Err(ConfigError::backlog(format!(
                "backlog.max_results must be {}-{}, got {}",
                MIN_MAX_RESULTS, MAX_MAX_RESULTS, self.max_results
            )));
        }

        if !(MIN_DIAGNOSTICS_SAMPLE..=MAX_DIAGNOSTICS_SAMPLE).contains(&self.diagnostics_sample_size)
        {
            return Err(ConfigError::backlog(format!(
                "backlog.diagnostics_sample_size must be {}-{}, got {}",
                MIN_DIAGNOSTICS_SAMPLE, MAX_DIAGNOSTICS_SAMPLE, self.diagnostics_sample_size
            )));
        }

        Ok(())
    }
}
