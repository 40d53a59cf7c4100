//! Request-facing admission middleware.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};

use crate::http::errors;
use crate::http::gate::GateState;
use crate::observability::metrics;

/// Admit or reject one request against the client's token bucket.
///
/// Identity is the host portion of the peer address (port stripped), so
/// concurrent connections from one host share a quota. Every admitted
/// request is counted; no request is admitted without mutating the
/// registry. When the limiter is disabled by configuration the registry is
/// bypassed entirely.
pub async fn enforce(State(state): State<GateState>, request: Request, next: Next) -> Response {
    let identity = match client_identity(&request) {
        Some(identity) => identity,
        None => {
            // The listener was not set up to propagate peer addresses. That
            // is a deployment fault, not a client error.
            return errors::server_error_response(
                request.method(),
                request.uri(),
                &"remote address unavailable: listener must serve with connect info",
            );
        }
    };

    if !state.config.limiter.enabled {
        return next.run(request).await;
    }

    if state.registry.check_and_consume(&identity) {
        next.run(request).await
    } else {
        metrics::record_request_throttled();
        errors::rate_limit_exceeded_response()
    }
}

/// Host portion of the connection's remote address.
fn client_identity(request: &Request) -> Option<String> {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn identity_strips_the_port() {
        let mut request = Request::new(Body::empty());
        let addr: SocketAddr = "192.0.2.7:49152".parse().unwrap();
        request.extensions_mut().insert(ConnectInfo(addr));

        assert_eq!(client_identity(&request).as_deref(), Some("192.0.2.7"));
    }

    #[test]
    fn identity_is_none_without_connect_info() {
        let request = Request::new(Body::empty());
        assert!(client_identity(&request).is_none());
    }
}
