//! Local HTTP runtime for serving a router during development.

mod config;
mod server;

pub use config::RuntimeConfig;
pub use server::ShuntServer;
