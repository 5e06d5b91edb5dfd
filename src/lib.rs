//! # Shunt - Async Request Dispatch with Normalized Responses
//!
//! Shunt sits between an HTTP-shaped trigger event and a set of async
//! handler functions. It resolves the event's `(path, method)` pair against
//! an exact-match route table, derives a per-request application context,
//! invokes the handler, and shapes every outcome, success or failure, into
//! a uniform response envelope.
//!
//! ```text
//!   trigger event ──► Router ──► route table lookup
//!                       │             │ miss: minimal 500 envelope
//!                       │ hit         ▼
//!                       ▼
//!              body normalization ──► on_invoke ──► context ──► handler
//!                       │ fault            │ fault      │ fault    │
//!                       ▼                  ▼            ▼          ▼
//!                  ┌─────────────── fault classifier ────────┐  success
//!                  ▼                                         │     │
//!            failure envelope                                │     ▼
//!                  │                                         │ response
//!                  ▼                                         │  builder
//!          { statusCode, body, headers } ◄───────────────────┴─────┘
//! ```
//!
//! Routers compose: a child router's table can be absorbed into a parent
//! under the parent's path prefix, while the child stays usable on its own.
//!
//! ## Usage
//!
//! ```rust
//! use serde_json::json;
//! use shunt::prelude::*;
//!
//! tokio_test::block_on(async {
//!     let mut router = Router::with_defaults();
//!     router.get(
//!         "/foo",
//!         |_event: HttpEvent, _ctx: InvocationContext, _app: AppContext| async move {
//!             Ok(json!({ "foo": "foo" }))
//!         },
//!         RouteOptions::default(),
//!     );
//!
//!     let mut ctx = InvocationContext::new("demo", "req-1");
//!     let response = router
//!         .dispatch(HttpEvent::new(Method::Get, "/foo"), &mut ctx)
//!         .await;
//!
//!     assert_eq!(response.status_code, 200);
//!     assert_eq!(response.body, "{\"foo\":\"foo\"}");
//! });
//! ```

pub mod fault;
pub mod http;
pub mod route;
pub mod router;
pub mod runtime;

pub use fault::{classify, ErrorRule, Fault, FaultMatcher, RawFault, SideEffect, StructuredFault};
pub use http::{HeaderValue, HttpEvent, InvocationContext, Method, ResponseEnvelope};
pub use route::{
    AppContext, CacheDirective, CachePolicy, HandlerResult, RouteConfig, RouteHandler,
    RouteOptions, RouteTable,
};
pub use router::{Router, RouterConfig};
pub use runtime::{RuntimeConfig, ShuntServer};

/// Everything most embedders need, in one import.
pub mod prelude {
    pub use crate::fault::{
        ErrorRule, Fault, FaultMatcher, RawFault, SideEffect, StructuredFault,
    };
    pub use crate::http::{HeaderValue, HttpEvent, InvocationContext, Method, ResponseEnvelope};
    pub use crate::route::{
        AppContext, CacheDirective, CachePolicy, HandlerResult, RouteConfig, RouteHandler,
        RouteOptions,
    };
    pub use crate::router::{
        ContextProvider, ErrorHook, FaultSink, InvokeHook, Router, RouterConfig, TracingFaultSink,
    };
    pub use crate::runtime::{RuntimeConfig, ShuntServer};
    pub use async_trait::async_trait;
}
