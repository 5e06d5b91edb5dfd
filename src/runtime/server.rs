//! Local HTTP runtime feeding the dispatcher.
//!
//! This is a development harness: it adapts plain HTTP requests into
//! trigger events, dispatches them through a [`Router`], and renders the
//! envelopes back as HTTP responses. It adds no routing semantics of its
//! own.

use crate::http::{HttpEvent, InvocationContext, Method, ResponseEnvelope};
use crate::router::Router;
use crate::runtime::RuntimeConfig;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

/// Local HTTP server dispatching every request through a [`Router`].
pub struct ShuntServer {
    config: RuntimeConfig,
    router: Arc<Router>,
}

impl ShuntServer {
    /// Wrap a fully wired router.
    pub fn new(config: RuntimeConfig, router: Router) -> Self {
        Self {
            config,
            router: Arc::new(router),
        }
    }

    /// Bind and serve until the process is stopped.
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr: SocketAddr = self.config.bind_addr().parse()?;
        let listener = TcpListener::bind(addr).await?;

        info!("shunt runtime listening on http://{}", addr);

        let router = self.router;
        let config = self.config;

        loop {
            let (stream, remote_addr) = listener.accept().await?;
            let io = TokioIo::new(stream);

            let router = router.clone();
            let config = config.clone();

            tokio::task::spawn(async move {
                let service = service_fn(move |req| {
                    let router = router.clone();
                    let config = config.clone();
                    async move { handle_request(req, router, config, remote_addr).await }
                });

                if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                    error!("error serving connection: {:?}", err);
                }
            });
        }
    }
}

async fn handle_request(
    req: Request<Incoming>,
    router: Arc<Router>,
    config: RuntimeConfig,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let path = req.uri().path().to_string();
    let request_id = generate_request_id();

    debug!("{} {} from {} [{}]", req.method(), path, remote_addr, request_id);

    if config.enable_health && path == "/_health" {
        return Ok(plain_response(200, "OK"));
    }

    let method = match Method::parse(req.method().as_str()) {
        Some(method) => method,
        None => return Ok(plain_response(405, "Unsupported method")),
    };

    let event = match convert_request(req, method, &path, &config).await {
        Ok(event) => event,
        Err(err) => {
            warn!("rejecting request [{}]: {}", request_id, err);
            return Ok(plain_response(400, &err.to_string()));
        }
    };

    let mut ctx = InvocationContext::new(&config.function_name, &request_id);
    let envelope = router.dispatch(event, &mut ctx).await;

    Ok(render_envelope(envelope))
}

/// Adapt a hyper request into a trigger event.
///
/// Bodies that are not valid UTF-8 are carried base64-encoded with the
/// encoding flag set, matching how function platforms deliver binary
/// payloads.
async fn convert_request(
    req: Request<Incoming>,
    method: Method,
    path: &str,
    config: &RuntimeConfig,
) -> Result<HttpEvent, Box<dyn std::error::Error + Send + Sync>> {
    let mut event = HttpEvent::new(method, path);

    for (name, value) in req.headers() {
        if let Ok(value) = value.to_str() {
            event.headers.insert(name.as_str().to_string(), value.to_string());
        }
    }

    if let Some(query) = req.uri().query() {
        event = event.field("rawQueryString", Value::String(query.to_string()));
    }

    let body = req.collect().await?.to_bytes();
    if body.len() > config.max_body_size {
        return Err(format!("request body exceeds {} bytes", config.max_body_size).into());
    }

    if !body.is_empty() {
        match String::from_utf8(body.to_vec()) {
            Ok(text) => event = event.body(text),
            Err(_) => event = event.encoded_body(STANDARD.encode(&body)),
        }
    }

    Ok(event)
}

/// Render a response envelope as a hyper response.
fn render_envelope(envelope: ResponseEnvelope) -> Response<Full<Bytes>> {
    let status = hyper::StatusCode::from_u16(envelope.status_code).unwrap_or_else(|_| {
        warn!("invalid status code {}, using 500", envelope.status_code);
        hyper::StatusCode::INTERNAL_SERVER_ERROR
    });

    let mut builder = Response::builder().status(status);

    if !envelope.headers.contains_key("content-type") {
        builder = builder.header("content-type", "application/json");
    }
    for (name, value) in &envelope.headers {
        builder = builder.header(name, value.render());
    }

    match builder.body(Full::new(Bytes::from(envelope.body))) {
        Ok(response) => response,
        Err(err) => {
            warn!("failed to render response: {}", err);
            plain_response(500, "\"Internal server error\"")
        }
    }
}

fn plain_response(status: u16, message: &str) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(message.to_string())));
    *response.status_mut() =
        hyper::StatusCode::from_u16(status).unwrap_or(hyper::StatusCode::INTERNAL_SERVER_ERROR);
    response
}

/// Generate a unique request ID from the current time.
fn generate_request_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{:x}", timestamp)
}
