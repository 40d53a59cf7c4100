//! Field-level request validation collector.

use std::collections::HashMap;

/// Accumulates field→message validation failures for one request.
///
/// Handlers own the rules; the gate owns the rendering. A non-empty
/// collector feeds the 422 envelope via
/// [`failed_validation_response`](crate::http::errors::failed_validation_response).
#[derive(Debug, Default)]
pub struct Validator {
    errors: HashMap<String, String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record a failure for `key`, keeping the first message if one is
    /// already present.
    pub fn add_error(&mut self, key: &str, message: &str) {
        self.errors
            .entry(key.to_string())
            .or_insert_with(|| message.to_string());
    }

    /// Record a failure for `key` unless `ok` holds.
    pub fn check(&mut self, ok: bool, key: &str, message: &str) {
        if !ok {
            self.add_error(key, message);
        }
    }

    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    pub fn into_errors(self) -> HashMap<String, String> {
        self.errors
    }
}
