use async_trait::async_trait;

use crate::config::LlmConfig;
use crate::errors::PanchangError;
use crate::models::chat::{ChatCompletion, ChatCompletionCreate};

#[async_trait]
pub trait LLMClientTrait: Send + Sync {
    async fn request_chat_completion(
        &self,
        request: ChatCompletionCreate,
    ) -> Result<ChatCompletion, PanchangError>;
}

pub struct LLMClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl LLMClient {
    pub fn new(client: reqwest::Client, config: &LlmConfig) -> Self {
        Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl LLMClientTrait for LLMClient {
    async fn request_chat_completion(
        &self,
        request: ChatCompletionCreate,
    ) -> Result<ChatCompletion, PanchangError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, "/chat/completions"))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(PanchangError::ApiError(format!(
                "status {status}, text {text}"
            )));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}
