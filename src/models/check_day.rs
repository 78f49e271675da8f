use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct CheckDayRequest {
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Body of every `/check_day` reply, success or failure.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CheckDayResponse {
    pub response: String,
}

impl CheckDayResponse {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}
