use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid {field} '{value}': {reason}")]
    InvalidDate {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Start date {start} is after end date {end}")]
    InvalidDateRange { start: String, end: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Storage,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::ApiError(_) | EtlError::HttpStatus { .. } => ErrorCategory::Network,
            EtlError::IoError(_) => ErrorCategory::Storage,
            EtlError::SerializationError(_) => ErrorCategory::Data,
            EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::InvalidDate { .. }
            | EtlError::InvalidDateRange { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::ApiError(e) if e.is_timeout() => {
                "The provider did not answer in time; raise --timeout or rerun later".to_string()
            }
            EtlError::ApiError(_) => {
                "Check network connectivity and the provider base URL, then rerun".to_string()
            }
            EtlError::HttpStatus { status, .. } if *status >= 500 => {
                "The provider is overloaded or down; increase the pause and rerun later"
                    .to_string()
            }
            EtlError::HttpStatus { .. } => {
                "Check the station id and base URL; use --continue-on-error to skip bad days"
                    .to_string()
            }
            EtlError::IoError(_) => {
                "Make sure the output directory exists and is writable".to_string()
            }
            EtlError::SerializationError(_) => "Check the --report path".to_string(),
            EtlError::InvalidDate { .. } => "Dates must be written as dd-mm-yyyy".to_string(),
            EtlError::InvalidDateRange { .. } => {
                "Swap the start and end dates so that start is not after end".to_string()
            }
            EtlError::ConfigValidationError { .. } | EtlError::InvalidConfigValueError { .. } => {
                "Review the command line arguments and the settings file".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Invalid input: {}", self),
            ErrorCategory::Network => format!("Download failed: {}", self),
            ErrorCategory::Storage => format!("Could not write output: {}", self),
            ErrorCategory::Data => format!("Could not process data: {}", self),
        }
    }

    /// Process exit code for a run that ended with this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
