//! Build-time Configuration
//!
//! Values are baked in at compile time from the environment:
//! - `SCHEDULE_API_URL`: base URL of the task service (empty = same origin)
//! - `SCHEDULE_LOG_LEVEL`: `error`, `warn`, `info`, `debug` or `trace`

use grid_model::GridDimensions;
use log::LevelFilter;

/// Records kept by the in-memory log history
pub const LOG_HISTORY: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL for `/getScheduledJobs`, without a trailing slash
    pub api_base_url: String,
    pub log_level: LevelFilter,
    /// Grid size before the user changes it
    pub initial_dimensions: GridDimensions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            log_level: LevelFilter::Info,
            initial_dimensions: GridDimensions::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("SCHEDULE_API_URL"), option_env!("SCHEDULE_LOG_LEVEL"))
    }

    pub fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_url
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            log_level: log_level
                .and_then(|level| level.trim().parse().ok())
                .unwrap_or(defaults.log_level),
            initial_dimensions: defaults.initial_dimensions,
        }
    }

    pub fn tasks_url(&self) -> String {
        format!("{}/getScheduledJobs", self.api_base_url)
    }
}
