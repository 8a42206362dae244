//! Unified crate error types
//!
//! Statistics, charts and formatters are total and never fail. Only the
//! edges that touch serialized data (history JSON, CSV writer, config file)
//! return `InsightsError`.

use serde::Serialize;
use thiserror::Error;

/// Crate-level error type
#[derive(Error, Debug)]
pub enum InsightsError {
    /// Detection history JSON could not be decoded
    #[error("History parse error: {0}")]
    History(#[from] serde_json::Error),

    /// CSV writer failure
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration file could not be (de)serialized
    #[error("Config format error: {0}")]
    ConfigFormat(#[from] serde_yaml::Error),

    /// File operation error
    #[error("File operation error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration value out of range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Serializable error response for the UI bridge
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for client-side handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl InsightsError {
    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create a config validation error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Stable error code for the UI layer
    pub fn code(&self) -> &'static str {
        match self {
            Self::History(_) => "HISTORY_PARSE_ERROR",
            Self::Csv(_) => "CSV_ERROR",
            Self::ConfigFormat(_) => "CONFIG_FORMAT_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<InsightsError> for ErrorResponse {
    fn from(err: InsightsError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

impl Serialize for InsightsError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        ErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InsightsError::internal("something went wrong");
        assert_eq!(err.to_string(), "Internal error: something went wrong");
    }

    #[test]
    fn test_error_serialization() {
        let err = InsightsError::invalid_config("window_minutes must be > 0");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("INVALID_CONFIG"));
        assert!(json.contains("window_minutes must be > 0"));
    }

    #[test]
    fn test_from_json_error() {
        let parse_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err: InsightsError = parse_err.into();
        assert_eq!(err.code(), "HISTORY_PARSE_ERROR");

        let response = ErrorResponse::from(err);
        assert_eq!(response.code, "HISTORY_PARSE_ERROR");
        assert!(response.message.starts_with("History parse error"));
    }
}
