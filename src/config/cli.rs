use crate::config::toml_config::TomlSettings;
use crate::config::{
    ErrorPolicy, PacingPolicy, RunConfig, DEFAULT_BASE_URL, DEFAULT_SLEEP_INTERVAL,
    DEFAULT_SLEEP_SECONDS, DEFAULT_TIMEOUT_SECONDS,
};
use crate::core::expander::{parse_cli_date, resolve_range};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "water-level")]
#[command(about = "Download historical water levels for a DMI station, one request per day")]
pub struct CliArgs {
    /// Station number, e.g. 20303
    pub station_id: String,

    /// First day to download (dd-mm-yyyy)
    pub start_date: String,

    /// Last day to download, inclusive (dd-mm-yyyy)
    pub end_date: String,

    /// Number of requests between pauses [default: 1000]
    pub sleep_interval: Option<usize>,

    /// Length of each pause in seconds [default: 1]
    pub sleep_seconds: Option<f64>,

    /// TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Provider endpoint
    #[arg(long)]
    pub base_url: Option<String>,

    /// Directory for water_level_<station>.txt [default: .]
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Skip days that fail to download instead of aborting the run
    #[arg(long)]
    pub continue_on_error: bool,

    /// Per-request timeout in seconds [default: 30]
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Write a JSON run report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliArgs {
    /// Loads the settings file if one was given and resolves the run
    /// configuration. Command line values win over the file.
    pub fn resolve(&self) -> Result<RunConfig> {
        let settings = match &self.config {
            Some(path) => {
                tracing::debug!("Loading settings from {}", path.display());
                let settings = TomlSettings::from_file(path)?;
                settings.validate()?;
                settings
            }
            None => TomlSettings::default(),
        };
        self.resolve_with(&settings)
    }

    pub fn resolve_with(&self, settings: &TomlSettings) -> Result<RunConfig> {
        let start = parse_cli_date("start_date", &self.start_date)?;
        let end = parse_cli_date("end_date", &self.end_date)?;
        let range = resolve_range(start, end)?;

        let pacing = PacingPolicy {
            sleep_interval: self
                .sleep_interval
                .or(settings.pacing.sleep_interval)
                .unwrap_or(DEFAULT_SLEEP_INTERVAL),
            sleep_seconds: self
                .sleep_seconds
                .or(settings.pacing.sleep_seconds)
                .unwrap_or(DEFAULT_SLEEP_SECONDS),
        };

        let on_error = if self.continue_on_error {
            ErrorPolicy::Continue
        } else {
            settings.error_handling.on_fetch_error.unwrap_or_default()
        };

        let config = RunConfig {
            station: self.station_id.clone(),
            range,
            pacing,
            on_error,
            base_url: self
                .base_url
                .clone()
                .or_else(|| settings.source.base_url.clone())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(
                self.timeout
                    .or(settings.source.timeout_seconds)
                    .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            ),
            output_dir: self
                .output_dir
                .clone()
                .or_else(|| settings.output.directory.clone())
                .unwrap_or_else(|| PathBuf::from(".")),
            report_path: self
                .report
                .clone()
                .or_else(|| settings.output.report_path.clone()),
        };

        config.validate()?;
        Ok(config)
    }
}
