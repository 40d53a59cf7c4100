//! Error responses, one constructor per outcome.
//!
//! Every non-2xx body is `{"error": <string | object>}` through the
//! envelope writer. Client-caused rejections are never logged; fatal
//! outcomes always are, with method and URI context, and the client sees
//! only a fixed generic message.

use std::collections::HashMap;
use std::fmt::Display;

use axum::{
    http::{Method, StatusCode, Uri},
    response::Response,
};
use serde::Serialize;
use serde_json::json;

use crate::http::body::BodyError;
use crate::http::envelope::write_json;

/// The only message a client ever sees for a fatal outcome.
pub const SERVER_ERROR_MESSAGE: &str =
    "the server encountered a problem and could not process your request";

/// Wrap `message` in the error envelope at `status`.
pub fn error_response<M: Serialize>(status: StatusCode, message: M) -> Response {
    write_json(status, &json!({ "error": message }), None)
}

/// Fatal outcome: log the real cause, answer with the generic message.
pub fn server_error_response(method: &Method, uri: &Uri, err: &dyn Display) -> Response {
    tracing::error!(method = %method, uri = %uri, "{err}");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE)
}

pub fn rate_limit_exceeded_response() -> Response {
    error_response(StatusCode::TOO_MANY_REQUESTS, "rate limit exceeded")
}

pub fn bad_request_response(err: &BodyError) -> Response {
    error_response(StatusCode::BAD_REQUEST, err.to_string())
}

/// Well-formed payload that failed domain rules: field→message map at 422.
pub fn failed_validation_response(errors: &HashMap<String, String>) -> Response {
    error_response(StatusCode::UNPROCESSABLE_ENTITY, errors)
}

pub fn not_found_response() -> Response {
    error_response(StatusCode::NOT_FOUND, "the requested resource could not be found")
}

pub fn method_not_allowed_response(method: &Method) -> Response {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("the {method} method is not supported for this resource"),
    )
}

/// Router fallback handler producing the 404 envelope.
pub async fn not_found() -> Response {
    not_found_response()
}

/// Method-router fallback handler producing the 405 envelope.
pub async fn method_not_allowed(method: Method) -> Response {
    method_not_allowed_response(&method)
}
