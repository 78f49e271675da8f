#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use good_day_panchang::errors::PanchangError;
use good_day_panchang::llm_client::LLMClientTrait;
use good_day_panchang::models::chat::{ChatCompletion, ChatCompletionCreate};
use good_day_panchang::panchang_client::PanchangClientTrait;

pub struct MockPanchangClient {
    response: Result<Value, PanchangError>,
    dates: Arc<Mutex<Vec<String>>>,
}

impl MockPanchangClient {
    pub fn new(response: Result<Value, PanchangError>) -> Self {
        Self {
            response,
            dates: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_dates(&self) -> Vec<String> {
        self.dates.lock().unwrap().clone()
    }
}

#[async_trait]
impl PanchangClientTrait for MockPanchangClient {
    async fn fetch_panchang(&self, date: &str) -> Result<Value, PanchangError> {
        self.dates.lock().unwrap().push(date.to_string());
        self.response.clone()
    }
}

pub struct MockLLMClient {
    responses: Arc<Mutex<VecDeque<Result<ChatCompletion, PanchangError>>>>,
    calls: Arc<Mutex<Vec<ChatCompletionCreate>>>,
}

impl MockLLMClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn add_response(&self, response: Result<ChatCompletion, PanchangError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn add_json_response(&self, body: Value) {
        self.add_response(Ok(serde_json::from_value(body).unwrap()));
    }

    pub fn get_calls(&self) -> Vec<ChatCompletionCreate> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LLMClientTrait for MockLLMClient {
    async fn request_chat_completion(
        &self,
        request: ChatCompletionCreate,
    ) -> Result<ChatCompletion, PanchangError> {
        self.calls.lock().unwrap().push(request);

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(PanchangError::ApiError("no mock response".to_string())))
    }
}
