//! Uniform wire envelope for every response the gate produces.

use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Serialize `data` to the wire format: pretty-printed JSON with tab
/// indentation, terminated by a newline. Caller-supplied headers are
/// applied before the standard ones, so a handler can add e.g. `Location`
/// on creation.
pub fn try_write_json<T: Serialize>(
    status: StatusCode,
    data: &T,
    headers: Option<HeaderMap>,
) -> Result<Response, serde_json::Error> {
    let mut buf = Vec::with_capacity(256);
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    data.serialize(&mut serializer)?;
    buf.push(b'\n');

    let mut response = Response::new(Body::from(buf));
    *response.status_mut() = status;
    if let Some(extra) = headers {
        for (name, value) in extra.iter() {
            response.headers_mut().append(name, value.clone());
        }
    }
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(response)
}

/// Infallible variant of [`try_write_json`]. Serialization of an internal
/// payload should not fail; if it does, the failure is logged and a bare
/// 500 without a structured body is emitted, since the structured-response
/// machinery itself is what failed.
pub fn write_json<T: Serialize>(status: StatusCode, data: &T, headers: Option<HeaderMap>) -> Response {
    match try_write_json(status, data, headers) {
        Ok(response) => response,
        Err(err) => {
            tracing::error!("failed to serialize response body: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
