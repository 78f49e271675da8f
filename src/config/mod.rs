use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::errors::PanchangError;

const CONFIG_FILE_VAR: &str = "GD_CONFIG_FILE";
const DEFAULT_CONFIG_FILE: &str = "./config.json";

/// Panchang provider location and credentials.
///
/// `api_key` names an environment variable in the config file; the loader
/// replaces it with the variable's value.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PanchangConfig {
    pub api_url: String,
    pub api_key: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

impl PanchangConfig {
    pub fn coordinates(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

impl Default for PanchangConfig {
    fn default() -> Self {
        Self {
            api_url: consts::DEFAULT_PANCHANG_API_URL.to_string(),
            api_key: consts::DEFAULT_PANCHANG_KEY_VAR.to_string(),
            latitude: consts::DEFAULT_LATITUDE,
            longitude: consts::DEFAULT_LONGITUDE,
            timezone: consts::DEFAULT_TIMEZONE.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LlmConfig {
    pub api_url: String,
    pub api_key: String,
    pub model_name: String,
    pub temperature: f64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_url: consts::DEFAULT_LLM_API_URL.to_string(),
            api_key: consts::DEFAULT_LLM_KEY_VAR.to_string(),
            model_name: consts::DEFAULT_MODEL.to_string(),
            temperature: consts::DEFAULT_TEMPERATURE,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: consts::SERVER_HOST.to_string(),
            port: consts::SERVER_PORT,
        }
    }
}

/// Bounds for every outbound call to either provider.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HttpClientConfig {
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: consts::CONNECT_TIMEOUT_SECS,
            read_timeout_secs: consts::READ_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub panchang: PanchangConfig,
    pub llm: LlmConfig,
    pub server: ServerConfig,
    pub http_client: HttpClientConfig,
}

pub trait ConfigLoader: Send + Sync {
    fn load_config(&self) -> Result<Config, PanchangError>;
}

pub struct FileConfigLoader {
    path: PathBuf,
    required: bool,
}

impl FileConfigLoader {
    /// Reads `GD_CONFIG_FILE`, falling back to an optional `./config.json`.
    pub fn new() -> Self {
        match std::env::var(CONFIG_FILE_VAR) {
            Ok(path) => Self::with_path(path),
            Err(_) => Self {
                path: PathBuf::from(DEFAULT_CONFIG_FILE),
                required: false,
            },
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: true,
        }
    }

    fn read_file(&self) -> Result<Config, PanchangError> {
        if !self.required && !self.path.exists() {
            log::info!(
                "no config file at {}, using built-in defaults",
                self.path.display()
            );
            return Ok(Config::default());
        }
        let config_str = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&config_str)?)
    }
}

impl Default for FileConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load_config(&self) -> Result<Config, PanchangError> {
        let mut config = self.read_file()?;
        resolve_env(&mut config, |name| std::env::var(name).ok())?;
        Ok(config)
    }
}

/// Swaps key variable names for their values and applies `GD_HOST`/`GD_PORT`.
///
/// Unset keys resolve to an empty string so the service still starts.
pub fn resolve_env<F>(config: &mut Config, lookup: F) -> Result<(), PanchangError>
where
    F: Fn(&str) -> Option<String>,
{
    config.panchang.api_key = lookup(&config.panchang.api_key).unwrap_or_default();
    config.llm.api_key = lookup(&config.llm.api_key).unwrap_or_default();

    if config.panchang.api_key.is_empty() {
        log::warn!("panchang api key is not set");
    }
    if config.llm.api_key.is_empty() {
        log::warn!("llm api key is not set");
    }

    if let Some(host) = lookup("GD_HOST") {
        config.server.host = host;
    }
    if let Some(port) = lookup("GD_PORT") {
        config.server.port = port
            .parse()
            .map_err(|_| PanchangError::ConfigError(format!("invalid GD_PORT: {port}")))?;
    }

    Ok(())
}

pub fn load_config() -> Result<Config, PanchangError> {
    let loader = FileConfigLoader::new();
    loader.load_config()
}
