#![allow(dead_code)]

use std::sync::Arc;

use serde_json::Value;
use wiremock::{
    Mock, MockServer, Request, ResponseTemplate,
    matchers::{header, method, path},
};

use good_day_panchang::config::{Config, HttpClientConfig, LlmConfig, PanchangConfig, ServerConfig};
use good_day_panchang::http_client::build_http_client;
use good_day_panchang::models::chat::{ChatCompletionCreate, Message};
use good_day_panchang::service::CheckDayService;

pub const PANCHANG_PATH: &str = "/v2/astrology/panchang";
pub const PANCHANG_KEY: &str = "test-panchang-key";
pub const LLM_KEY: &str = "test-llm-key";

pub fn create_test_config(panchang_base: &str, llm_base: &str) -> Config {
    Config {
        panchang: PanchangConfig {
            api_url: format!("{}{}", panchang_base, PANCHANG_PATH),
            api_key: PANCHANG_KEY.to_string(),
            ..PanchangConfig::default()
        },
        llm: LlmConfig {
            api_url: llm_base.to_string(),
            api_key: LLM_KEY.to_string(),
            ..LlmConfig::default()
        },
        server: ServerConfig::default(),
        http_client: HttpClientConfig::default(),
    }
}

pub fn create_test_service(config: &Config) -> Arc<CheckDayService> {
    let http_client = build_http_client(&config.http_client).unwrap();
    Arc::new(CheckDayService::new(http_client, config))
}

pub fn today() -> String {
    chrono::Local::now()
        .date_naive()
        .format("%Y-%m-%d")
        .to_string()
}

pub async fn setup_panchang_mock(status: u16, body: impl Into<Value>) -> MockServer {
    let mock_server = MockServer::start().await;
    let bearer = format!("Bearer {}", PANCHANG_KEY);

    Mock::given(method("GET"))
        .and(path(PANCHANG_PATH))
        .and(header("authorization", bearer.as_str()))
        .respond_with(ResponseTemplate::new(status).set_body_json(body.into()))
        .mount(&mock_server)
        .await;

    mock_server
}

pub async fn setup_chat_completion_mock(status: u16, body: impl Into<Value>) -> MockServer {
    let mock_server = MockServer::start().await;
    let bearer = format!("Bearer {}", LLM_KEY);

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", bearer.as_str()))
        .respond_with(ResponseTemplate::new(status).set_body_json(body.into()))
        .mount(&mock_server)
        .await;

    mock_server
}

/// Fails the test on drop if `/chat/completions` is hit.
pub async fn setup_unreachable_llm_mock() -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;

    mock_server
}

pub async fn received(mock_server: &MockServer) -> Vec<Request> {
    mock_server.received_requests().await.unwrap_or_default()
}

pub fn query_value(request: &Request, key: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

pub fn user_prompt(request: &Request) -> String {
    let chat: ChatCompletionCreate = serde_json::from_slice(&request.body).unwrap();
    chat.messages
        .into_iter()
        .find_map(|m| match m {
            Message::User(user) => Some(user.content),
            _ => None,
        })
        .expect("user message should be present")
}
