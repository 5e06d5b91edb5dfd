//! Dispatcher configuration.

use crate::http::HeaderValue;
use crate::router::hooks::{ContextProvider, ErrorHook, FaultSink, InvokeHook, TracingFaultSink};
use std::collections::HashMap;
use std::sync::Arc;

/// Configuration for a [`Router`](crate::router::Router).
///
/// Hooks and the context function belong to the router they are configured
/// on; composition copies routes, never configuration.
#[derive(Clone)]
pub struct RouterConfig {
    /// Path prefix applied exactly once when a route is registered.
    pub prefix: String,
    /// Default response headers, merged at the lowest precedence.
    pub headers: HashMap<String, HeaderValue>,
    /// Pre-invoke hook.
    pub on_invoke: Option<Arc<dyn InvokeHook>>,
    /// Error-observation hook.
    pub on_error: Option<Arc<dyn ErrorHook>>,
    /// Application-context derivation; handlers get an empty object when
    /// absent.
    pub context: Option<Arc<dyn ContextProvider>>,
    /// Failure-path observability sink.
    pub sink: Arc<dyn FaultSink>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            headers: HashMap::new(),
            on_invoke: None,
            on_error: None,
            context: None,
            sink: Arc::new(TracingFaultSink),
        }
    }
}

impl RouterConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the registration path prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Add a default response header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<HeaderValue>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the pre-invoke hook.
    pub fn on_invoke(mut self, hook: impl InvokeHook + 'static) -> Self {
        self.on_invoke = Some(Arc::new(hook));
        self
    }

    /// Set the error-observation hook.
    pub fn on_error(mut self, hook: impl ErrorHook + 'static) -> Self {
        self.on_error = Some(Arc::new(hook));
        self
    }

    /// Set the application-context derivation function.
    pub fn context(mut self, provider: impl ContextProvider + 'static) -> Self {
        self.context = Some(Arc::new(provider));
        self
    }

    /// Replace the failure-path sink.
    pub fn sink(mut self, sink: impl FaultSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }
}
