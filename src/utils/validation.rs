use crate::utils::error::{EtlError, Result};
use std::time::Duration;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(EtlError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// Station ids end up in the output filename, so they must not escape the
/// output directory.
pub fn validate_station_id(field_name: &str, station: &str) -> Result<()> {
    validate_non_empty_string(field_name, station)?;

    if station.contains(['/', '\\', '\0']) || station == "." || station == ".." {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: station.to_string(),
            reason: "Station id cannot contain path separators or null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_seconds(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 || Duration::try_from_secs_f64(value).is_err() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a non-negative number of seconds".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://example.com").is_ok());
        assert!(validate_url("base_url", "http://servlet.dmi.dk/vandstand/servlet/ImageServlet").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "invalid-url").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_station_id() {
        assert!(validate_station_id("station", "20303").is_ok());
        assert!(validate_station_id("station", "").is_err());
        assert!(validate_station_id("station", "   ").is_err());
        assert!(validate_station_id("station", "../etc").is_err());
        assert!(validate_station_id("station", "a\\b").is_err());
        assert!(validate_station_id("station", "..").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("sleep_interval", 5, 1).is_ok());
        assert!(validate_positive_number("sleep_interval", 0, 1).is_err());
    }

    #[test]
    fn test_validate_seconds() {
        assert!(validate_seconds("sleep_seconds", 0.0).is_ok());
        assert!(validate_seconds("sleep_seconds", 1.5).is_ok());
        assert!(validate_seconds("sleep_seconds", -1.0).is_err());
        assert!(validate_seconds("sleep_seconds", f64::NAN).is_err());
        assert!(validate_seconds("sleep_seconds", f64::INFINITY).is_err());
        assert!(validate_seconds("sleep_seconds", 1e20).is_err());
        assert!(validate_seconds("sleep_seconds", 86_400.0 * 365.0).is_ok());
    }
}
