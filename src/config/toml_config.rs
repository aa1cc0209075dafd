use crate::config::ErrorPolicy;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{validate_positive_number, validate_seconds, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("environment variable pattern is valid")
});

/// Optional settings file. Every field may be omitted; the command line
/// overrides whatever is set here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlSettings {
    #[serde(default)]
    pub source: SourceSettings,
    #[serde(default)]
    pub pacing: PacingSettings,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub error_handling: ErrorHandlingSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceSettings {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PacingSettings {
    pub sleep_interval: Option<usize>,
    pub sleep_seconds: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSettings {
    pub directory: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorHandlingSettings {
    pub on_fetch_error: Option<ErrorPolicy>,
}

impl TomlSettings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of the environment variable. Unset
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl Validate for TomlSettings {
    fn validate(&self) -> Result<()> {
        if let Some(url) = &self.source.base_url {
            validate_url("source.base_url", url)?;
        }
        if let Some(timeout) = self.source.timeout_seconds {
            validate_positive_number("source.timeout_seconds", timeout as usize, 1)?;
        }
        if let Some(interval) = self.pacing.sleep_interval {
            validate_positive_number("pacing.sleep_interval", interval, 1)?;
        }
        if let Some(seconds) = self.pacing.sleep_seconds {
            validate_seconds("pacing.sleep_seconds", seconds)?;
        }
        Ok(())
    }
}
