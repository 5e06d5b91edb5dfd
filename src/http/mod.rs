//! HTTP-shaped boundary types: the inbound trigger event, the invocation
//! metadata, and the outbound response envelope.

mod context;
mod request;
mod response;

pub use context::InvocationContext;
pub use request::{HttpEvent, Method};
pub use response::{HeaderValue, ResponseEnvelope};
