//! Strict request-body decoding with classified failures.

use axum::body::{to_bytes, Body};
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use thiserror::Error;

/// Default cap on request body size.
pub const DEFAULT_MAX_BODY_BYTES: usize = 256_000;

/// Closed set of body-decoding failures. Each variant's display string is
/// the exact client-visible message; all map to HTTP 400.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BodyError {
    #[error("the body must not be larger than {limit} bytes")]
    TooLarge { limit: usize },

    #[error("the body must not be empty")]
    Empty,

    #[error("the body contains badly-formed JSON (at character {offset})")]
    Syntax { offset: usize },

    /// Input ended mid-structure; distinct from [`BodyError::Empty`].
    #[error("the body contains badly-formed JSON")]
    Truncated,

    #[error("the body contains unknown key {name}")]
    UnknownKey { name: String },

    #[error("the body contains the incorrect JSON type (at character {offset})")]
    IncorrectType { offset: usize },

    #[error("the body must only contain a single JSON value")]
    MultipleValues,

    /// Passthrough for data errors outside the closed set, e.g. a missing
    /// required field.
    #[error("{0}")]
    Other(String),
}

/// Collect an HTTP body capped at `max_bytes` and decode it strictly.
///
/// Destination types reject unrecognized payload keys by deriving
/// `Deserialize` with `#[serde(deny_unknown_fields)]`.
pub async fn read_json<T: DeserializeOwned>(body: Body, max_bytes: usize) -> Result<T, BodyError> {
    let bytes = match to_bytes(body, max_bytes).await {
        Ok(bytes) => bytes,
        // axum surfaces the length cap as an opaque boxed error; the
        // display string is the only stable discriminant.
        Err(err) if err.to_string().contains("length limit exceeded") => {
            return Err(BodyError::TooLarge { limit: max_bytes });
        }
        Err(err) => return Err(BodyError::Other(err.to_string())),
    };
    decode_json(&bytes, max_bytes)
}

/// Decode exactly one JSON value from `input`, enforcing in order: the
/// size cap, non-emptiness, well-formedness, known keys and value types,
/// and single-value-only content. The first failing rule wins.
pub fn decode_json<T: DeserializeOwned>(input: &[u8], max_bytes: usize) -> Result<T, BodyError> {
    if input.len() > max_bytes {
        return Err(BodyError::TooLarge { limit: max_bytes });
    }

    let mut stream = serde_json::Deserializer::from_slice(input).into_iter::<T>();
    let value = match stream.next() {
        None => return Err(BodyError::Empty),
        Some(Err(err)) => return Err(classify(&err, input)),
        Some(Ok(value)) => value,
    };

    // Re-probe past the first value: trailing non-whitespace content means
    // a smuggled second payload.
    let rest = &input[stream.byte_offset()..];
    if rest.iter().any(|b| !b.is_ascii_whitespace()) {
        return Err(BodyError::MultipleValues);
    }

    Ok(value)
}

fn classify(err: &serde_json::Error, input: &[u8]) -> BodyError {
    let offset = byte_offset(input, err.line(), err.column());
    match err.classify() {
        Category::Eof => BodyError::Truncated,
        Category::Syntax => BodyError::Syntax { offset },
        Category::Data => {
            let message = err.to_string();
            if let Some(name) = unknown_field_name(&message) {
                BodyError::UnknownKey { name }
            } else if message.starts_with("invalid type") || message.starts_with("invalid value") {
                // serde_json does not surface the failing field name, so
                // the position stands in for it.
                BodyError::IncorrectType { offset }
            } else {
                BodyError::Other(message)
            }
        }
        Category::Io => BodyError::Other(err.to_string()),
    }
}

/// Pull the key name out of serde's "unknown field `name`, expected ..."
/// message.
fn unknown_field_name(message: &str) -> Option<String> {
    let rest = message.strip_prefix("unknown field `")?;
    let end = rest.find('`')?;
    Some(rest[..end].to_string())
}

/// Translate serde's 1-based line/column into a 1-based character
/// position within the whole input.
fn byte_offset(input: &[u8], line: usize, column: usize) -> usize {
    if line <= 1 {
        return column;
    }
    let mut offset = 0;
    let mut remaining_newlines = line - 1;
    for (i, &b) in input.iter().enumerate() {
        if b == b'\n' {
            remaining_newlines -= 1;
            if remaining_newlines == 0 {
                offset = i + 1;
                break;
            }
        }
    }
    offset + column
}
