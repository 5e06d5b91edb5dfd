//! Failure taxonomy for the dispatch layer.
//!
//! Handlers and hooks fail with a [`Fault`]: either a raw value that a
//! route's declared rules may classify, or a structured failure that
//! already carries its HTTP status and payload and passes through
//! classification untouched.

mod rules;

pub use rules::{classify, ErrorRule, FaultMatcher};

use crate::http::HeaderValue;
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Side effect attached to a structured fault, run once when the fault
/// reaches the dispatcher. Failures raised here are recorded and swallowed;
/// they never alter the response.
#[async_trait]
pub trait SideEffect: Send + Sync {
    /// Run the side effect.
    async fn run(&self) -> Result<(), Fault>;
}

#[async_trait]
impl<F, Fut> SideEffect for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), Fault>> + Send + 'static,
{
    async fn run(&self) -> Result<(), Fault> {
        (self)().await
    }
}

/// An unclassified failure.
///
/// Raw faults carry no HTTP meaning of their own. The dispatcher matches
/// them against the resolved route's [`ErrorRule`]s; a fault no rule claims
/// falls back to `500 Internal server error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFault {
    /// Failure name, matched by [`FaultMatcher::Name`].
    pub name: String,
    /// Human-readable message, matched by [`FaultMatcher::Message`].
    pub message: String,
    /// Optional coarse failure family, matched by [`FaultMatcher::Category`].
    pub category: Option<String>,
}

impl RawFault {
    /// Create a raw fault with no category tag.
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            category: None,
        }
    }

    /// Tag the fault with a failure family.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

impl fmt::Display for RawFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

/// A failure that already carries its HTTP status and payload.
///
/// Structured faults bypass route-level classification entirely. A handler
/// that wants full control over its failure response raises one of these
/// instead of a [`RawFault`].
#[derive(Clone)]
pub struct StructuredFault {
    /// Resolved HTTP status code.
    pub status_code: u16,
    /// Payload message.
    pub message: String,
    /// Headers that shadow the fixed cross-origin pair on the failure path.
    pub headers: HashMap<String, HeaderValue>,
    /// Side effect run when the fault reaches the dispatcher.
    pub on_error: Option<Arc<dyn SideEffect>>,
}

impl StructuredFault {
    /// Create a structured fault with the given status and message.
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
            headers: HashMap::new(),
            on_error: None,
        }
    }

    /// Shortcut for a 500 Internal Server Error fault.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(500, message)
    }

    /// Shortcut for a 400 Bad Request fault.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, message)
    }

    /// Shortcut for a 403 Forbidden fault.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(403, message)
    }

    /// Shortcut for a 404 Not Found fault.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, message)
    }

    /// Add a header to the failure envelope. Explicit headers win over the
    /// fixed cross-origin pair.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<HeaderValue>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Attach a side effect to run when the fault reaches the dispatcher.
    pub fn on_error(mut self, effect: impl SideEffect + 'static) -> Self {
        self.on_error = Some(Arc::new(effect));
        self
    }
}

impl fmt::Debug for StructuredFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructuredFault")
            .field("status_code", &self.status_code)
            .field("message", &self.message)
            .field("headers", &self.headers)
            .field("on_error", &self.on_error.as_ref().map(|_| "<side effect>"))
            .finish()
    }
}

impl fmt::Display for StructuredFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status_code, self.message)
    }
}

/// A failure raised anywhere in the per-request lifecycle.
#[derive(Debug, Clone)]
pub enum Fault {
    /// Unclassified failure, subject to the route's declared rules.
    Raw(RawFault),
    /// Pre-classified failure carrying its own status and payload.
    Structured(StructuredFault),
}

impl Fault {
    /// Shortcut for an unclassified fault with no category.
    pub fn raw(name: impl Into<String>, message: impl Into<String>) -> Self {
        Fault::Raw(RawFault::new(name, message))
    }

    /// Whether the fault already carries its HTTP shape.
    pub fn is_structured(&self) -> bool {
        matches!(self, Fault::Structured(_))
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::Raw(fault) => fault.fmt(f),
            Fault::Structured(fault) => fault.fmt(f),
        }
    }
}

impl std::error::Error for Fault {}

impl From<RawFault> for Fault {
    fn from(fault: RawFault) -> Self {
        Fault::Raw(fault)
    }
}

impl From<StructuredFault> for Fault {
    fn from(fault: StructuredFault) -> Self {
        Fault::Structured(fault)
    }
}

impl From<std::io::Error> for Fault {
    fn from(err: std::io::Error) -> Self {
        Fault::raw("IoError", err.to_string())
    }
}

impl From<serde_json::Error> for Fault {
    fn from(err: serde_json::Error) -> Self {
        Fault::raw("SerializationError", err.to_string())
    }
}
