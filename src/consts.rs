pub const DEFAULT_EVENT: &str = "marriage";
pub const TODAY: &str = "today";
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const UNKNOWN: &str = "unknown";

pub const HEALTH_MESSAGE: &str = "✅ Good Day Smart Panchang API is running.";
pub const PANCHANG_UNAVAILABLE: &str = "Error: Panchang data unavailable.";
pub const PROCESSING_ERROR_PREFIX: &str = "Error processing request: ";
pub const INVALID_BODY_PREFIX: &str = "Invalid request body: ";

pub const SYSTEM_PROMPT: &str = "You're an expert Vedic astrologer.";

// Delhi
pub const DEFAULT_LATITUDE: f64 = 28.6139;
pub const DEFAULT_LONGITUDE: f64 = 77.2090;
pub const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";

pub const DEFAULT_PANCHANG_API_URL: &str = "https://api.prokerala.com/v2/astrology/panchang";
pub const DEFAULT_PANCHANG_KEY_VAR: &str = "PANCHANG_API_KEY";

pub const DEFAULT_LLM_API_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_LLM_KEY_VAR: &str = "OPENAI_API_KEY";
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

pub const CONNECT_TIMEOUT_SECS: u64 = 10;
pub const READ_TIMEOUT_SECS: u64 = 60;

pub const SERVER_HOST: &str = "0.0.0.0";
pub const SERVER_PORT: u16 = 5000;
