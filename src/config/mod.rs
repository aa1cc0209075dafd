#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::DateRange;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_positive_number, validate_seconds, validate_station_id, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://servlet.dmi.dk/vandstand/servlet/ImageServlet";
pub const DEFAULT_SLEEP_INTERVAL: usize = 1000;
pub const DEFAULT_SLEEP_SECONDS: f64 = 1.0;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Pause `sleep_seconds` after every `sleep_interval`-th request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PacingPolicy {
    pub sleep_interval: usize,
    pub sleep_seconds: f64,
}

impl Default for PacingPolicy {
    fn default() -> Self {
        Self {
            sleep_interval: DEFAULT_SLEEP_INTERVAL,
            sleep_seconds: DEFAULT_SLEEP_SECONDS,
        }
    }
}

impl PacingPolicy {
    /// `issued` counts requests made so far, including the one just finished.
    pub fn pause_after(&self, issued: usize) -> bool {
        self.sleep_interval > 0 && issued > 0 && issued % self.sleep_interval == 0
    }

    pub fn pause_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.sleep_seconds.max(0.0)).unwrap_or(Duration::MAX)
    }
}

/// What to do when a single day cannot be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop the run on the first failed day; nothing is written.
    #[default]
    Abort,
    /// Record the failure, keep fetching, write what was fetched.
    Continue,
}

/// Everything a run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub station: String,
    pub range: DateRange,
    pub pacing: PacingPolicy,
    pub on_error: ErrorPolicy,
    pub base_url: String,
    pub timeout: Duration,
    pub output_dir: PathBuf,
    pub report_path: Option<PathBuf>,
}

impl RunConfig {
    pub fn new(station: impl Into<String>, range: DateRange) -> Self {
        Self {
            station: station.into(),
            range,
            pacing: PacingPolicy::default(),
            on_error: ErrorPolicy::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            output_dir: PathBuf::from("."),
            report_path: None,
        }
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_station_id("station_id", &self.station)?;
        validate_url("base_url", &self.base_url)?;
        validate_positive_number("sleep_interval", self.pacing.sleep_interval, 1)?;
        validate_seconds("sleep_seconds", self.pacing.sleep_seconds)?;
        validate_positive_number("timeout", self.timeout.as_secs() as usize, 1)?;
        Ok(())
    }
}
