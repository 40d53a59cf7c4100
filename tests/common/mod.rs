//! Shared fixtures for integration tests: a minimal quote API mounted
//! behind the gate, standing in for the application handlers the gate
//! wraps in production.

use std::net::SocketAddr;
use std::sync::Once;

use axum::{
    body::Body,
    extract::{ConnectInfo, Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::Response,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use request_gate::http::body::read_json;
use request_gate::http::envelope::write_json;
use request_gate::http::errors::{self, bad_request_response, failed_validation_response};
use request_gate::http::healthcheck::healthcheck;
use request_gate::validation::Validator;
use request_gate::{Gate, GateConfig, GateState};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CreateQuote {
    #[serde(default)]
    content: String,
    #[serde(default)]
    author: String,
}

/// Create-record handler exercising decoder, validator, and writer the way
/// a real application handler would.
async fn create_quote(State(state): State<GateState>, request: Request) -> Response {
    let incoming: CreateQuote =
        match read_json(request.into_body(), state.config.body.max_bytes).await {
            Ok(incoming) => incoming,
            Err(err) => return bad_request_response(&err),
        };

    let mut v = Validator::new();
    v.check(!incoming.content.is_empty(), "content", "must be provided");
    v.check(
        incoming.content.len() <= 100,
        "content",
        "must not be more than 100 bytes long",
    );
    v.check(!incoming.author.is_empty(), "author", "must be provided");
    v.check(
        incoming.author.len() <= 25,
        "author",
        "must not be more than 25 bytes long",
    );
    if !v.is_empty() {
        return failed_validation_response(v.errors());
    }

    let mut headers = HeaderMap::new();
    headers.insert(header::LOCATION, HeaderValue::from_static("/v1/quotes/1"));
    write_json(
        StatusCode::CREATED,
        &json!({"quote": {"id": 1, "content": incoming.content, "author": incoming.author}}),
        Some(headers),
    )
}

/// Handler that fails the way a buggy downstream would.
async fn boom() -> Response {
    panic!("quote store invariant violated")
}

static TRACING: Once = Once::new();

/// Build the fixture router and wrap it with the gate.
pub fn gated_app(config: GateConfig) -> (Gate, Router) {
    // Gate logging is visible when a test run sets RUST_LOG.
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });

    let gate = Gate::new(config);
    let router = Router::new()
        .route("/v1/healthcheck", get(healthcheck))
        .route(
            "/v1/quotes",
            post(create_quote).fallback(errors::method_not_allowed),
        )
        .route("/v1/boom", get(boom))
        .with_state(gate.state());
    let app = gate.apply(router);
    (gate, app)
}

/// A request carrying peer-address info, as a listener serving with
/// connect info would produce.
pub fn request_from(addr: &str, method: Method, uri: &str, body: Body) -> Request {
    let mut request = Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
        .expect("request construction");
    let addr: SocketAddr = addr.parse().expect("socket address");
    request.extensions_mut().insert(ConnectInfo(addr));
    request
}
