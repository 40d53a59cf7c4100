//! Panic containment boundary.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use axum::{
    extract::Request,
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use futures_util::FutureExt;

use crate::http::errors::{error_response, SERVER_ERROR_MESSAGE};
use crate::observability::metrics;

/// Outermost wrapper around the request chain. Any panic raised while
/// producing a response is intercepted before it reaches the transport
/// layer: the connection is marked non-reusable, the fault is logged with
/// method and URI context, and the standard fatal envelope is emitted.
/// The underlying cause is never echoed to the client.
pub async fn recover_panics(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => {
            let cause = panic_message(panic.as_ref());
            tracing::error!(method = %method, uri = %uri, "recovered from panic: {cause}");
            metrics::record_panic_recovered();

            let mut response = error_response(StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE);
            // Clients must not pipeline another request on this connection.
            response
                .headers_mut()
                .insert(header::CONNECTION, HeaderValue::from_static("close"));
            response
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message
    } else {
        "non-string panic payload"
    }
}
