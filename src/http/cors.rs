//! CORS middleware against a configured trusted-origin list.

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::http::gate::GateState;

const ALLOWED_METHODS: &str = "OPTIONS, PUT, PATCH, DELETE";
const ALLOWED_HEADERS: &str = "Authorization, Content-Type";

/// Echo `Access-Control-Allow-Origin` for trusted origins and answer
/// trusted preflight requests directly. `Vary` headers are always added:
/// the response depends on the request origin and method, so caches must
/// not reuse it across them.
pub async fn apply_cors(State(state): State<GateState>, request: Request, next: Next) -> Response {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let trusted = origin
        .as_deref()
        .is_some_and(|origin| state.config.cors.trusted_origins.iter().any(|t| t == origin));

    if trusted {
        let preflight = request.method() == Method::OPTIONS
            && request.headers().contains_key(header::ACCESS_CONTROL_REQUEST_METHOD);
        if preflight {
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::OK;
            add_vary_headers(&mut response);
            let headers = response.headers_mut();
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                origin_value(origin.as_deref().unwrap_or_default()),
            );
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static(ALLOWED_METHODS),
            );
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static(ALLOWED_HEADERS),
            );
            return response;
        }
    }

    let mut response = next.run(request).await;
    add_vary_headers(&mut response);
    if trusted {
        response.headers_mut().insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            origin_value(origin.as_deref().unwrap_or_default()),
        );
    }
    response
}

fn add_vary_headers(response: &mut Response) {
    let headers = response.headers_mut();
    headers.append(header::VARY, HeaderValue::from_static("Origin"));
    headers.append(
        header::VARY,
        HeaderValue::from_static("Access-Control-Request-Method"),
    );
}

fn origin_value(origin: &str) -> HeaderValue {
    // The origin came in as a valid header value; round-tripping it back
    // out cannot fail.
    HeaderValue::from_str(origin).unwrap_or(HeaderValue::from_static(""))
}
