//! The dispatcher: route registration, composition, and the per-request
//! lifecycle.
//!
//! A [`Router`] is wired once at setup time and then serves any number of
//! concurrent dispatches through `&self`. Each dispatch walks the same
//! pipeline: resolve the route, normalize the body encoding, run the
//! pre-invoke hook, derive the application context, invoke the handler,
//! and shape the outcome into a [`ResponseEnvelope`]. Failures at any step
//! go through the fault classifier instead of unwinding.

mod config;
mod hooks;
mod respond;

pub use config::RouterConfig;
pub use hooks::{ContextProvider, ErrorHook, FaultSink, InvokeHook, TracingFaultSink};
pub use respond::{ALLOW_CREDENTIALS, ALLOW_ORIGIN};

use crate::fault::{classify, Fault, RawFault, StructuredFault};
use crate::http::{HttpEvent, InvocationContext, Method, ResponseEnvelope};
use crate::route::{empty_context, RouteConfig, RouteHandler, RouteOptions, RouteTable};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::Value;
use tracing::debug;

/// The request dispatcher.
///
/// Registration and composition take `&mut self`; dispatch takes `&self`,
/// so a wired router can be shared across tasks behind an `Arc`.
pub struct Router {
    config: RouterConfig,
    table: RouteTable,
}

impl Router {
    /// Create a router with the given configuration.
    pub fn new(config: RouterConfig) -> Self {
        Self {
            config,
            table: RouteTable::new(),
        }
    }

    /// Create a router with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(RouterConfig::default())
    }

    /// The router's configuration.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// The router's route table.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Register a full route definition.
    ///
    /// The configured prefix is prepended to the route's path exactly once,
    /// here; lookups compare the inbound path against the stored, prefixed
    /// form. Registering the same (path, method) again replaces the earlier
    /// route.
    pub fn route(&mut self, mut config: RouteConfig) {
        config.path = format!("{}{}", self.config.prefix, config.path);
        debug!("registering {} {}", config.method, config.path);
        self.table.insert(config);
    }

    /// Register a GET route.
    pub fn get(
        &mut self,
        path: impl Into<String>,
        handler: impl RouteHandler + 'static,
        options: RouteOptions,
    ) {
        self.route(RouteConfig::new(Method::Get, path, handler, options));
    }

    /// Register a POST route.
    pub fn post(
        &mut self,
        path: impl Into<String>,
        handler: impl RouteHandler + 'static,
        options: RouteOptions,
    ) {
        self.route(RouteConfig::new(Method::Post, path, handler, options));
    }

    /// Register a PUT route.
    pub fn put(
        &mut self,
        path: impl Into<String>,
        handler: impl RouteHandler + 'static,
        options: RouteOptions,
    ) {
        self.route(RouteConfig::new(Method::Put, path, handler, options));
    }

    /// Register a DELETE route.
    pub fn delete(
        &mut self,
        path: impl Into<String>,
        handler: impl RouteHandler + 'static,
        options: RouteOptions,
    ) {
        self.route(RouteConfig::new(Method::Delete, path, handler, options));
    }

    /// Register a PATCH route.
    pub fn patch(
        &mut self,
        path: impl Into<String>,
        handler: impl RouteHandler + 'static,
        options: RouteOptions,
    ) {
        self.route(RouteConfig::new(Method::Patch, path, handler, options));
    }

    /// Absorb every route of `other` under this router's prefix.
    ///
    /// Routes are copied; `other` keeps its own table and stays usable.
    /// Hooks and the context function are not inherited: requests served
    /// through `self` use `self`'s configuration even on absorbed routes.
    /// Returns `&mut self` so compositions chain.
    pub fn merge(&mut self, other: &Router) -> &mut Self {
        debug!(
            "merging {} routes under prefix {:?}",
            other.table.len(),
            self.config.prefix
        );
        self.table.merge(&other.table, &self.config.prefix);
        self
    }

    /// Dispatch one inbound event and shape the outcome into an envelope.
    ///
    /// This never fails: route misses, handler faults, and hook faults all
    /// produce a well-formed envelope. The invocation context's
    /// wait-for-idle flag is cleared before anything else runs.
    pub async fn dispatch(
        &self,
        event: HttpEvent,
        ctx: &mut InvocationContext,
    ) -> ResponseEnvelope {
        ctx.wait_for_idle = false;

        let route = match self.table.lookup(&event.path, event.method) {
            Ok(route) => route,
            Err(miss) => {
                debug!("{} {}: {:?}", event.method, event.path, miss);
                return respond::failure(&StructuredFault::from(miss));
            }
        };

        debug!("dispatching {} {} [{}]", event.method, event.path, ctx.request_id);

        match self.run(route, event, ctx).await {
            Ok(value) => respond::success(route, &self.config.headers, &value),
            Err(fault) => self.fail(route, fault).await,
        }
    }

    /// The happy path: normalize the body, run the pre-invoke hook, derive
    /// the application context, and invoke the handler.
    async fn run(
        &self,
        route: &RouteConfig,
        mut event: HttpEvent,
        ctx: &InvocationContext,
    ) -> Result<Value, Fault> {
        decode_body(&mut event)?;

        if let Some(hook) = &self.config.on_invoke {
            hook.invoke(event.clone(), ctx.clone()).await?;
        }

        let app = match &self.config.context {
            Some(provider) => provider.derive(event.clone(), ctx.clone()).await?,
            None => empty_context(),
        };

        route.handler.handle(event, ctx.clone(), app).await
    }

    /// The failure path: normalize the fault, run its side effect and the
    /// observation hook, and build the failure envelope.
    async fn fail(&self, route: &RouteConfig, fault: Fault) -> ResponseEnvelope {
        self.config.sink.record(&fault);

        let normalized = match fault {
            Fault::Structured(structured) => {
                if let Some(effect) = &structured.on_error {
                    if let Err(effect_fault) = effect.run().await {
                        self.config.sink.hook_failure("fault side effect", &effect_fault);
                    }
                }
                structured
            }
            Fault::Raw(raw) => classify(raw, &route.errors),
        };

        if let Some(hook) = &self.config.on_error {
            if let Err(hook_fault) = hook.observe(normalized.clone()).await {
                self.config.sink.hook_failure("error hook", &hook_fault);
            }
        }

        respond::failure(&normalized)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Decode a base64 body to text and clear the flag, so hooks and handlers
/// only ever observe decoded bodies. Events without an encoded, non-empty
/// body pass through untouched.
fn decode_body(event: &mut HttpEvent) -> Result<(), Fault> {
    let encoded = match event.body.as_deref() {
        Some(body) if event.is_base64_encoded && !body.is_empty() => body,
        _ => return Ok(()),
    };

    let decoded = STANDARD
        .decode(encoded)
        .map_err(|err| RawFault::new("Base64DecodeError", err.to_string()))?;

    event.body = Some(String::from_utf8_lossy(&decoded).into_owned());
    event.is_base64_encoded = false;
    Ok(())
}
