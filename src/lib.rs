pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::{HttpDayFetcher, LocalStorage};
pub use config::{ErrorPolicy, PacingPolicy, RunConfig};
pub use crate::core::{etl::EtlEngine, pipeline::WaterLevelPipeline};
pub use domain::model::RunReport;
pub use utils::error::{EtlError, Result};
