//! Declared error rules and the raw-fault classifier.

use super::{RawFault, StructuredFault};

/// Status used when no declared rule claims a raw fault.
pub(crate) const FALLBACK_STATUS: u16 = 500;
/// Message used when no declared rule claims a raw fault.
pub(crate) const FALLBACK_MESSAGE: &str = "Internal server error";

/// Discriminator deciding whether an [`ErrorRule`] claims a raw fault.
///
/// Matching is an explicit, exhaustive comparison on the fault's fields;
/// there is no type inspection anywhere in classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaultMatcher {
    /// Claims a fault whose category tag equals the given tag.
    Category(String),
    /// Claims a fault whose name equals the given name.
    Name(String),
    /// Claims a fault whose message equals the given message.
    Message(String),
}

impl FaultMatcher {
    /// Match on the fault's category tag.
    pub fn category(tag: impl Into<String>) -> Self {
        FaultMatcher::Category(tag.into())
    }

    /// Match on the fault's name.
    pub fn name(name: impl Into<String>) -> Self {
        FaultMatcher::Name(name.into())
    }

    /// Match on the fault's message.
    pub fn message(message: impl Into<String>) -> Self {
        FaultMatcher::Message(message.into())
    }

    /// Whether this matcher claims the given fault.
    pub fn matches(&self, fault: &RawFault) -> bool {
        match self {
            FaultMatcher::Category(tag) => fault.category.as_deref() == Some(tag.as_str()),
            FaultMatcher::Name(name) => fault.name == *name,
            FaultMatcher::Message(message) => fault.message == *message,
        }
    }
}

/// A route-declared mapping from a family of raw faults to a response
/// status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRule {
    /// Discriminator tried against the raw fault.
    pub matcher: FaultMatcher,
    /// Status the response takes when this rule matches.
    pub status_code: u16,
    /// Message the response takes when this rule matches; `None` keeps the
    /// fault's own message.
    pub message: Option<String>,
}

impl ErrorRule {
    /// Create a rule that keeps the fault's own message.
    pub fn new(matcher: FaultMatcher, status_code: u16) -> Self {
        Self {
            matcher,
            status_code,
            message: None,
        }
    }

    /// Replace the fault's message when this rule matches.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Whether this rule claims the given fault.
    pub fn matches(&self, fault: &RawFault) -> bool {
        self.matcher.matches(fault)
    }
}

/// Classify a raw fault against a route's declared rules.
///
/// Rules are tried in declaration order and the first match wins. A fault
/// no rule claims becomes `500 Internal server error`.
pub fn classify(fault: RawFault, rules: &[ErrorRule]) -> StructuredFault {
    match rules.iter().find(|rule| rule.matches(&fault)) {
        Some(rule) => {
            let message = rule.message.clone().unwrap_or(fault.message);
            StructuredFault::new(rule.status_code, message)
        }
        None => StructuredFault::new(FALLBACK_STATUS, FALLBACK_MESSAGE),
    }
}
