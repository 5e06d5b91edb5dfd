//! Dispatcher hooks: pre-invoke, context derivation, error observation,
//! and the injectable fault sink.

use crate::fault::{Fault, StructuredFault};
use crate::http::{HttpEvent, InvocationContext};
use crate::route::AppContext;
use async_trait::async_trait;
use std::future::Future;
use tracing::{error, warn};

/// Hook awaited with the raw event before context derivation and the
/// handler. A failure here skips both and goes to the classifier with the
/// resolved route's declared rules.
#[async_trait]
pub trait InvokeHook: Send + Sync {
    /// Observe an inbound event about to be handled.
    async fn invoke(&self, event: HttpEvent, ctx: InvocationContext) -> Result<(), Fault>;
}

#[async_trait]
impl<F, Fut> InvokeHook for F
where
    F: Fn(HttpEvent, InvocationContext) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), Fault>> + Send + 'static,
{
    async fn invoke(&self, event: HttpEvent, ctx: InvocationContext) -> Result<(), Fault> {
        (self)(event, ctx).await
    }
}

/// Derives the per-request application context handed to the handler.
#[async_trait]
pub trait ContextProvider: Send + Sync {
    /// Derive the application context for one dispatch.
    async fn derive(&self, event: HttpEvent, ctx: InvocationContext)
        -> Result<AppContext, Fault>;
}

#[async_trait]
impl<F, Fut> ContextProvider for F
where
    F: Fn(HttpEvent, InvocationContext) -> Fut + Send + Sync,
    Fut: Future<Output = Result<AppContext, Fault>> + Send + 'static,
{
    async fn derive(
        &self,
        event: HttpEvent,
        ctx: InvocationContext,
    ) -> Result<AppContext, Fault> {
        (self)(event, ctx).await
    }
}

/// Hook awaited with every fault after normalization, before the failure
/// envelope is built. Failures raised by the hook itself are recorded and
/// swallowed; they never reach the response.
#[async_trait]
pub trait ErrorHook: Send + Sync {
    /// Observe a normalized fault.
    async fn observe(&self, fault: StructuredFault) -> Result<(), Fault>;
}

#[async_trait]
impl<F, Fut> ErrorHook for F
where
    F: Fn(StructuredFault) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), Fault>> + Send + 'static,
{
    async fn observe(&self, fault: StructuredFault) -> Result<(), Fault> {
        (self)(fault).await
    }
}

/// Observability sink for the failure path.
///
/// The dispatcher reports every fault entering classification here, along
/// with every failure an observation hook or side effect raises. Swapping
/// the sink lets tests and embedders capture the failure stream instead of
/// reading logs.
pub trait FaultSink: Send + Sync {
    /// A fault is about to be classified.
    fn record(&self, fault: &Fault);
    /// An observation hook or side effect itself failed.
    fn hook_failure(&self, scope: &str, fault: &Fault);
}

/// Default sink emitting through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFaultSink;

impl FaultSink for TracingFaultSink {
    fn record(&self, fault: &Fault) {
        error!("request failed: {}", fault);
    }

    fn hook_failure(&self, scope: &str, fault: &Fault) {
        warn!("{} failed: {}", scope, fault);
    }
}
