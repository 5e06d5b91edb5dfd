//! Outbound response envelope produced by the dispatch layer.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A header value in the response envelope.
///
/// Envelopes allow boolean header values alongside plain text
/// (`Access-Control-Allow-Credentials` is the canonical case), so the
/// serialized form matches what the hosting platform expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeaderValue {
    /// Plain text value.
    Text(String),
    /// Boolean value, serialized as a JSON boolean.
    Flag(bool),
}

impl HeaderValue {
    /// Render the value for text-only transports.
    pub fn render(&self) -> String {
        match self {
            HeaderValue::Text(text) => text.clone(),
            HeaderValue::Flag(flag) => flag.to_string(),
        }
    }
}

impl From<&str> for HeaderValue {
    fn from(value: &str) -> Self {
        HeaderValue::Text(value.to_string())
    }
}

impl From<String> for HeaderValue {
    fn from(value: String) -> Self {
        HeaderValue::Text(value)
    }
}

impl From<bool> for HeaderValue {
    fn from(value: bool) -> Self {
        HeaderValue::Flag(value)
    }
}

/// The envelope every dispatch resolves to, success or failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    /// HTTP status code.
    pub status_code: u16,
    /// Serialized JSON body.
    pub body: String,
    /// Response headers.
    pub headers: HashMap<String, HeaderValue>,
}

impl ResponseEnvelope {
    /// Create an envelope with no headers.
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
            headers: HashMap::new(),
        }
    }

    /// Add a response header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<HeaderValue>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Get a response header by exact name.
    pub fn get_header(&self, key: &str) -> Option<&HeaderValue> {
        self.headers.get(key)
    }
}
