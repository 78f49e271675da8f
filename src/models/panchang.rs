use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::consts::UNKNOWN;
use crate::errors::PanchangError;

/// The four Panchang attributes the prompt is built from.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PanchangFacts {
    pub tithi_number: String,
    pub nakshatra_name: String,
    pub yoga_name: String,
    pub weekday_name: String,
}

impl PanchangFacts {
    /// Extracts the facts from a raw provider body.
    ///
    /// Only a missing `data` object is an error; any other gap becomes
    /// `"unknown"`.
    pub fn from_response(body: &Value) -> Result<Self, PanchangError> {
        let data = match body.get("data") {
            Some(data) if data.is_object() => data,
            _ => return Err(PanchangError::DataUnavailable),
        };

        Ok(Self {
            tithi_number: lookup(data, &["tithi", "details", "tithi_number"]),
            nakshatra_name: lookup(data, &["nakshatra", "name"]),
            yoga_name: lookup(data, &["yoga", "name"]),
            weekday_name: lookup(data, &["weekday", "name"]),
        })
    }
}

fn lookup(data: &Value, path: &[&str]) -> String {
    let mut current = data;
    for key in path {
        match current.get(key) {
            Some(next) => current = next,
            None => return UNKNOWN.to_string(),
        }
    }

    match current {
        Value::Null => UNKNOWN.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
