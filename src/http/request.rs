//! Inbound trigger event types consumed by the dispatch layer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

/// HTTP verb supported by the dispatch layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    /// Parse a verb from its wire form, case-insensitively.
    ///
    /// Returns `None` for verbs the dispatch layer does not route.
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("GET") {
            Some(Method::Get)
        } else if s.eq_ignore_ascii_case("POST") {
            Some(Method::Post)
        } else if s.eq_ignore_ascii_case("PUT") {
            Some(Method::Put)
        } else if s.eq_ignore_ascii_case("DELETE") {
            Some(Method::Delete)
        } else if s.eq_ignore_ascii_case("PATCH") {
            Some(Method::Patch)
        } else {
            None
        }
    }

    /// The canonical uppercase form of the verb.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An HTTP-shaped trigger event.
///
/// The routing key is the (`path`, `method`) pair; every other field rides
/// along untouched to the hooks and the handler. Fields the invoking
/// platform adds beyond the ones named here are preserved in `extra`, so an
/// event survives a deserialize/serialize round trip without losses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpEvent {
    /// Request path, compared byte-for-byte against registered routes.
    pub path: String,
    /// Request verb.
    pub method: Method,
    /// Request headers.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Request body, possibly base64-encoded (see `is_base64_encoded`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Whether `body` is base64-encoded. The dispatcher decodes the body
    /// and clears this flag before any hook or handler observes the event.
    #[serde(default)]
    pub is_base64_encoded: bool,
    /// Platform fields beyond the routed ones, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HttpEvent {
    /// Create an event with the given verb and path and nothing else.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            headers: HashMap::new(),
            body: None,
            is_base64_encoded: false,
            extra: Map::new(),
        }
    }

    /// Add a request header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set a plain-text body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self.is_base64_encoded = false;
        self
    }

    /// Set a base64-encoded body and mark it as such.
    pub fn encoded_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self.is_base64_encoded = true;
        self
    }

    /// Attach a passthrough platform field.
    pub fn field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Get a request header by exact name.
    pub fn get_header(&self, key: &str) -> Option<&String> {
        self.headers.get(key)
    }
}
