pub mod app;
pub mod config;
pub mod consts;
pub mod errors;
pub mod handlers;
pub mod http_client;
pub mod llm_client;
pub mod models;
pub mod panchang_client;
pub mod prompt;
pub mod service;
