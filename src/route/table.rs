//! Exact-match route table.

use crate::fault::StructuredFault;
use crate::http::Method;
use crate::route::config::RouteConfig;
use std::collections::HashMap;
use tracing::debug;

/// Message surfaced when no route claims a (path, method) pair.
const ROUTE_NOT_FOUND: &str = "Route not found";

/// Why a lookup missed.
///
/// Both variants surface to the caller as the same route-not-found
/// failure; the split exists for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMiss {
    /// No route is registered under the path.
    UnknownPath,
    /// The path is registered, but not for this verb.
    UnknownMethod,
}

impl From<RouteMiss> for StructuredFault {
    fn from(_: RouteMiss) -> Self {
        StructuredFault::new(500, ROUTE_NOT_FOUND)
    }
}

/// Table mapping (path, method) to a registered route.
///
/// Paths are opaque strings compared for exact byte equality; there is no
/// pattern matching, parameter capture, or prefix fallback of any kind.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, HashMap<Method, RouteConfig>>,
}

impl RouteTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a route under its (path, method) key, silently replacing any
    /// earlier registration for the same key.
    pub fn insert(&mut self, config: RouteConfig) {
        let method = config.method;
        let methods = self.routes.entry(config.path.clone()).or_default();
        if let Some(previous) = methods.insert(method, config) {
            debug!("route {} {} replaced", previous.method, previous.path);
        }
    }

    /// Resolve the route registered for the exact (path, method) pair.
    pub fn lookup(&self, path: &str, method: Method) -> Result<&RouteConfig, RouteMiss> {
        match self.routes.get(path) {
            None => Err(RouteMiss::UnknownPath),
            Some(methods) => methods.get(&method).ok_or(RouteMiss::UnknownMethod),
        }
    }

    /// Copy every route of `other` into this table with `prefix` prepended
    /// to its stored path. `other` is left untouched.
    pub fn merge(&mut self, other: &RouteTable, prefix: &str) {
        for route in other.iter() {
            let mut copy = route.clone();
            copy.path = format!("{}{}", prefix, route.path);
            self.insert(copy);
        }
    }

    /// Iterate all registered routes in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteConfig> {
        self.routes.values().flat_map(|methods| methods.values())
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.values().map(|methods| methods.len()).sum()
    }

    /// Whether the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
