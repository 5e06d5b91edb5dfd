//! Invocation metadata handed to the dispatch layer by the hosting platform.

/// Per-invocation metadata from the hosting platform.
///
/// `wait_for_idle` mirrors the platform knob that keeps an invocation open
/// until background work drains. The dispatcher clears it on entry so that
/// returning a response ends the invocation immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    /// Name of the deployed function handling the request.
    pub function_name: String,
    /// Platform-assigned request ID.
    pub request_id: String,
    /// Whether the platform should wait for background work before
    /// completing the invocation.
    pub wait_for_idle: bool,
}

impl InvocationContext {
    /// Create a context with the platform default of waiting for idle.
    pub fn new(function_name: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            request_id: request_id.into(),
            wait_for_idle: true,
        }
    }
}

impl Default for InvocationContext {
    fn default() -> Self {
        Self::new("", "")
    }
}
