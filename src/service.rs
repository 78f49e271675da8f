use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::config::{Config, LlmConfig};
use crate::consts;
use crate::errors::PanchangError;
use crate::llm_client::{LLMClient, LLMClientTrait};
use crate::models::check_day::CheckDayRequest;
use crate::models::panchang::PanchangFacts;
use crate::panchang_client::{PanchangClient, PanchangClientTrait};
use crate::prompt;

/// A `/check_day` request with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub event: String,
    pub date: String,
}

impl Query {
    pub fn resolve(request: CheckDayRequest, today: NaiveDate) -> Self {
        let event = request
            .event
            .unwrap_or_else(|| consts::DEFAULT_EVENT.to_string());
        let date = match request.date {
            Some(date) if date != consts::TODAY => date,
            _ => today.format(consts::DATE_FORMAT).to_string(),
        };
        Self { event, date }
    }
}

#[derive(Clone)]
pub struct CheckDayService {
    panchang: Arc<dyn PanchangClientTrait>,
    llm: Arc<dyn LLMClientTrait>,
    llm_config: LlmConfig,
}

impl CheckDayService {
    pub fn new(http_client: reqwest::Client, config: &Config) -> Self {
        Self::with_clients(
            Arc::new(PanchangClient::new(http_client.clone(), &config.panchang)),
            Arc::new(LLMClient::new(http_client, &config.llm)),
            config.llm.clone(),
        )
    }

    pub fn with_clients(
        panchang: Arc<dyn PanchangClientTrait>,
        llm: Arc<dyn LLMClientTrait>,
        llm_config: LlmConfig,
    ) -> Self {
        Self {
            panchang,
            llm,
            llm_config,
        }
    }

    /// Resolves the request against the local calendar and runs the pipeline.
    pub async fn check_day(&self, request: CheckDayRequest) -> Result<String, PanchangError> {
        let query = Query::resolve(request, Local::now().date_naive());
        self.answer(&query).await
    }

    pub async fn answer(&self, query: &Query) -> Result<String, PanchangError> {
        log::debug!("query: {:?}", query);

        let body = self.panchang.fetch_panchang(&query.date).await?;
        let facts = PanchangFacts::from_response(&body)?;
        log::debug!("panchang facts: {:?}", facts);

        let prompt = prompt::build_prompt(&query.date, &query.event, &facts);
        let request = prompt::build_chat_request(prompt, &self.llm_config);
        let completion = self.llm.request_chat_completion(request).await?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| PanchangError::ParseError("completion has no choices".to_string()))?;
        let content = choice.message.content.ok_or_else(|| {
            PanchangError::ParseError("completion choice has no content".to_string())
        })?;

        Ok(content.trim().to_string())
    }
}
