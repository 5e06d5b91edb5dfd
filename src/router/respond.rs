//! Response shaping: the success and failure arms of the envelope.

use crate::fault::StructuredFault;
use crate::http::{HeaderValue, ResponseEnvelope};
use crate::route::RouteConfig;
use serde_json::Value;
use std::collections::HashMap;

/// Name of the fixed allow-origin header.
pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
/// Name of the fixed allow-credentials header.
pub const ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";

/// The fixed cross-origin pair present on every envelope.
fn cross_origin_pair() -> HashMap<String, HeaderValue> {
    let mut headers = HashMap::new();
    headers.insert(ALLOW_ORIGIN.to_string(), HeaderValue::from("*"));
    headers.insert(ALLOW_CREDENTIALS.to_string(), HeaderValue::from(true));
    headers
}

/// Build the success envelope for a handler's return value.
///
/// Header precedence, lowest to highest: dispatcher defaults, route
/// headers, synthesized cache-control, the fixed cross-origin pair.
pub(crate) fn success(
    route: &RouteConfig,
    defaults: &HashMap<String, HeaderValue>,
    value: &Value,
) -> ResponseEnvelope {
    let mut headers = defaults.clone();
    headers.extend(route.headers.clone());
    if let Some(cache) = &route.cache {
        headers.insert(
            "cache-control".to_string(),
            HeaderValue::from(cache.header_value()),
        );
    }
    headers.extend(cross_origin_pair());

    ResponseEnvelope {
        status_code: route.status_code.unwrap_or(200),
        body: value.to_string(),
        headers,
    }
}

/// Build the failure envelope for a normalized fault.
///
/// The body is the fault's message, JSON-encoded. The fault's own headers
/// shadow the fixed cross-origin pair where the names collide.
pub(crate) fn failure(fault: &StructuredFault) -> ResponseEnvelope {
    let mut headers = cross_origin_pair();
    headers.extend(fault.headers.clone());

    ResponseEnvelope {
        status_code: fault.status_code,
        body: Value::String(fault.message.clone()).to_string(),
        headers,
    }
}
