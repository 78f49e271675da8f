use async_trait::async_trait;
use serde_json::Value;

use crate::config::PanchangConfig;
use crate::errors::PanchangError;

#[async_trait]
pub trait PanchangClientTrait: Send + Sync {
    /// Returns the provider's raw JSON body for `date`.
    async fn fetch_panchang(&self, date: &str) -> Result<Value, PanchangError>;
}

pub struct PanchangClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    timezone: String,
    coordinates: String,
}

impl PanchangClient {
    pub fn new(client: reqwest::Client, config: &PanchangConfig) -> Self {
        Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            timezone: config.timezone.clone(),
            coordinates: config.coordinates(),
        }
    }
}

#[async_trait]
impl PanchangClientTrait for PanchangClient {
    async fn fetch_panchang(&self, date: &str) -> Result<Value, PanchangError> {
        log::debug!("panchang request: date={date}, coordinates={}", self.coordinates);

        let response = self
            .client
            .get(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .query(&[
                ("date", date),
                ("timezone", self.timezone.as_str()),
                ("coordinates", self.coordinates.as_str()),
            ])
            .send()
            .await?;

        // Error envelopes are still JSON; whether `data` is present decides the outcome.
        let status = response.status();
        if !status.is_success() {
            log::warn!("panchang provider returned status {status}");
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}
