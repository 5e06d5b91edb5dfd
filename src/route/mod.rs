//! Route definitions: the handler trait, per-route options, cache policy,
//! and the exact-match table.

mod cache;
mod config;
mod handler;
mod table;

pub use cache::{CacheDirective, CachePolicy};
pub use config::{RouteConfig, RouteOptions};
pub use handler::{empty_context, AppContext, HandlerResult, RouteHandler};
pub use table::{RouteMiss, RouteTable};
