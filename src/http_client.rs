use std::time::Duration;

use crate::config::HttpClientConfig;
use crate::errors::PanchangError;

/// Shared client for both providers; a hung upstream fails with a timeout.
pub fn build_http_client(config: &HttpClientConfig) -> Result<reqwest::Client, PanchangError> {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .read_timeout(Duration::from_secs(config.read_timeout_secs))
        .build()
        .map_err(|e| PanchangError::ConfigError(e.to_string()))
}
