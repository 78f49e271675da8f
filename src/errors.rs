use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PanchangError {
    /// Provider answered without a top-level `data` object.
    DataUnavailable,
    ValidationError(String),
    ApiError(String),
    ParseError(String),
    ConfigError(String),
    NetworkError(String),
}

impl fmt::Display for PanchangError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanchangError::DataUnavailable => write!(f, "Panchang data unavailable"),
            PanchangError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            PanchangError::ApiError(msg) => write!(f, "API error: {}", msg),
            PanchangError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            PanchangError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            PanchangError::NetworkError(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for PanchangError {}

impl From<reqwest::Error> for PanchangError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            PanchangError::NetworkError(err.to_string())
        } else if err.is_decode() {
            PanchangError::ParseError(err.to_string())
        } else {
            PanchangError::ApiError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for PanchangError {
    fn from(err: serde_json::Error) -> Self {
        PanchangError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for PanchangError {
    fn from(err: std::io::Error) -> Self {
        PanchangError::ConfigError(err.to_string())
    }
}
