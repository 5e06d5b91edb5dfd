//! Route definitions and per-route options.

use crate::fault::ErrorRule;
use crate::http::{HeaderValue, Method};
use crate::route::cache::CachePolicy;
use crate::route::handler::RouteHandler;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Options attached to a route at registration time.
#[derive(Debug, Clone, Default)]
pub struct RouteOptions {
    /// Declared error rules, tried in order against raw faults.
    pub errors: Vec<ErrorRule>,
    /// Success status override; 200 when absent.
    pub status_code: Option<u16>,
    /// Cache policy; no cache-control header is emitted when absent.
    pub cache: Option<CachePolicy>,
    /// Extra response headers, merged above the dispatcher defaults.
    pub headers: HashMap<String, HeaderValue>,
}

impl RouteOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declared error rule.
    pub fn error_rule(mut self, rule: ErrorRule) -> Self {
        self.errors.push(rule);
        self
    }

    /// Override the success status code.
    pub fn status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    /// Declare a cache policy.
    pub fn cache(mut self, cache: CachePolicy) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Add a response header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<HeaderValue>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// A registered route: its key, its handler, and its response options.
#[derive(Clone)]
pub struct RouteConfig {
    /// Registered path. Carries the owning router's prefix once stored.
    pub path: String,
    /// Registered verb.
    pub method: Method,
    /// Handler invoked for this route.
    pub handler: Arc<dyn RouteHandler>,
    /// Declared error rules.
    pub errors: Vec<ErrorRule>,
    /// Success status override.
    pub status_code: Option<u16>,
    /// Cache policy.
    pub cache: Option<CachePolicy>,
    /// Extra response headers.
    pub headers: HashMap<String, HeaderValue>,
}

impl RouteConfig {
    /// Create a route from a handler and options.
    pub fn new(
        method: Method,
        path: impl Into<String>,
        handler: impl RouteHandler + 'static,
        options: RouteOptions,
    ) -> Self {
        Self {
            path: path.into(),
            method,
            handler: Arc::new(handler),
            errors: options.errors,
            status_code: options.status_code,
            cache: options.cache,
            headers: options.headers,
        }
    }
}

impl fmt::Debug for RouteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteConfig")
            .field("path", &self.path)
            .field("method", &self.method)
            .field("errors", &self.errors)
            .field("status_code", &self.status_code)
            .field("cache", &self.cache)
            .field("headers", &self.headers)
            .finish()
    }
}
