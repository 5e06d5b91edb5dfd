//! Handler trait and the per-request application context.

use crate::fault::Fault;
use crate::http::{HttpEvent, InvocationContext};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::future::Future;

/// Application context derived once per dispatch and handed to the handler
/// alongside the raw event.
pub type AppContext = Value;

/// The context used when no derivation function is configured.
pub fn empty_context() -> AppContext {
    Value::Object(Map::new())
}

/// Outcome of a route handler: a JSON value for the response body, or a
/// fault for the classifier.
pub type HandlerResult = Result<Value, Fault>;

/// An asynchronous route handler.
///
/// Implemented automatically for async functions and closures taking
/// `(HttpEvent, InvocationContext, AppContext)`; implement it by hand when
/// a handler carries its own state.
#[async_trait]
pub trait RouteHandler: Send + Sync {
    /// Handle a dispatched request.
    async fn handle(
        &self,
        event: HttpEvent,
        ctx: InvocationContext,
        app: AppContext,
    ) -> HandlerResult;
}

#[async_trait]
impl<F, Fut> RouteHandler for F
where
    F: Fn(HttpEvent, InvocationContext, AppContext) -> Fut + Send + Sync,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    async fn handle(
        &self,
        event: HttpEvent,
        ctx: InvocationContext,
        app: AppContext,
    ) -> HandlerResult {
        (self)(event, ctx, app).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Method;
    use serde_json::json;

    async fn echo_path(event: HttpEvent, _ctx: InvocationContext, _app: AppContext) -> HandlerResult {
        Ok(json!({ "path": event.path }))
    }

    #[test]
    fn test_functions_and_closures_are_handlers() {
        let from_fn = tokio_test::block_on(echo_path.handle(
            HttpEvent::new(Method::Get, "/a"),
            InvocationContext::default(),
            empty_context(),
        ))
        .unwrap();
        assert_eq!(from_fn, json!({ "path": "/a" }));

        let closure = |_event: HttpEvent, _ctx: InvocationContext, app: AppContext| async move {
            Ok(json!({ "seen": app["k"] }))
        };
        let from_closure = tokio_test::block_on(closure.handle(
            HttpEvent::new(Method::Get, "/b"),
            InvocationContext::default(),
            json!({ "k": "v" }),
        ))
        .unwrap();
        assert_eq!(from_closure, json!({ "seen": "v" }));
    }

    #[test]
    fn test_empty_context_is_an_object() {
        assert_eq!(empty_context(), json!({}));
    }
}
