//! The `(status, body)` envelope returned by every client operation.
//!
//! # Design
//! [`normalize`] is the one place where a transport response is turned into
//! an envelope: try JSON, fall back to the raw text, keep the status as-is.
//! Callers decide what a status means.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::http::HttpResponse;

/// Response body: decoded JSON, or the raw text when decoding failed.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Json(Value),
    Text(String),
}

impl Body {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Body::Json(value) => Some(value),
            Body::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Body::Json(_) => None,
            Body::Text(text) => Some(text),
        }
    }

    /// Field of a JSON object body.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_json().and_then(|value| value.get(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// Status code and normalized body of one response.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub status: u16,
    pub body: Body,
}

impl Envelope {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Typed view of a JSON body.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        match &self.body {
            Body::Json(value) => serde_json::from_value(value.clone())
                .map_err(|e| ApiError::Deserialization(e.to_string())),
            Body::Text(text) => Err(ApiError::Deserialization(format!(
                "status {} body is not JSON: {text:?}",
                self.status
            ))),
        }
    }
}

/// Turn a transport response into an envelope.
pub fn normalize(response: HttpResponse) -> Envelope {
    let body = match serde_json::from_str::<Value>(&response.body) {
        Ok(value) => Body::Json(value),
        Err(_) => Body::Text(response.body),
    };
    Envelope {
        status: response.status,
        body,
    }
}
