//! Shunt demo server.
//!
//! Wires a handful of sample routes onto the local runtime. Run it and poke
//! the endpoints with curl.

use serde_json::json;
use shunt::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// GET /hello - greets the caller, optionally by the X-Name header.
async fn hello(event: HttpEvent, ctx: InvocationContext, _app: AppContext) -> HandlerResult {
    let name = event
        .get_header("x-name")
        .cloned()
        .unwrap_or_else(|| "World".to_string());

    Ok(json!({
        "message": format!("Hello, {}!", name),
        "requestId": ctx.request_id,
    }))
}

/// POST /echo - returns the request body as seen by the handler.
async fn echo(event: HttpEvent, _ctx: InvocationContext, _app: AppContext) -> HandlerResult {
    Ok(json!({ "body": event.body }))
}

/// GET /brew - always fails, to show route-level error rules.
async fn brew(_event: HttpEvent, _ctx: InvocationContext, _app: AppContext) -> HandlerResult {
    Err(Fault::raw("GroundsExhausted", "out of coffee"))
}

/// GET /api/whoami - reads the application context the router derives.
async fn whoami(_event: HttpEvent, _ctx: InvocationContext, app: AppContext) -> HandlerResult {
    Ok(json!({ "deployment": app["deployment"] }))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("starting shunt demo server...");

    let mut api = Router::new(RouterConfig::new().prefix("/api"));
    api.get("/whoami", whoami, RouteOptions::default());

    let mut router = Router::new(
        RouterConfig::new()
            .header("x-powered-by", "shunt")
            .context(|_event: HttpEvent, _ctx: InvocationContext| async move {
                Ok(json!({ "deployment": "local" }))
            })
            .on_error(|fault: StructuredFault| async move {
                warn!("observed failure: {}", fault);
                Ok(())
            }),
    );

    router.get(
        "/hello",
        hello,
        RouteOptions::new().cache(
            CachePolicy::new(60)
                .directive(CacheDirective::Public)
                .directive(CacheDirective::MaxAge),
        ),
    );
    router.post("/echo", echo, RouteOptions::default());
    router.get(
        "/brew",
        brew,
        RouteOptions::new().error_rule(
            ErrorRule::new(FaultMatcher::name("GroundsExhausted"), 503).message("grab a tea instead"),
        ),
    );
    router.merge(&api);

    info!("routes: GET /hello, POST /echo, GET /brew, GET /api/whoami");
    info!("try: curl http://localhost:8080/hello");
    info!("health check: curl http://localhost:8080/_health");

    let config = RuntimeConfig::new().host("0.0.0.0").port(8080);
    ShuntServer::new(config, router).run().await
}
