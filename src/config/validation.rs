//! Semantic configuration checks, beyond what serde enforces.

use thiserror::Error;

use crate::config::schema::GateConfig;

/// One semantic violation in a loaded config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Check every semantic invariant; collect all violations rather than
/// stopping at the first.
pub fn validate_config(config: &GateConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let limiter = &config.limiter;
    if !limiter.rps.is_finite() || limiter.rps < 0.0 {
        errors.push(ValidationError::new(
            "limiter.rps",
            "must be a finite number greater than or equal to zero",
        ));
    }
    if limiter.burst < 1 {
        errors.push(ValidationError::new("limiter.burst", "must be at least one"));
    }
    if limiter.sweep_interval_secs == 0 {
        errors.push(ValidationError::new(
            "limiter.sweep_interval_secs",
            "must be at least one second",
        ));
    }
    // An idle threshold at or below the sweep interval could evict a
    // client that was active between two sweeps.
    if limiter.idle_timeout_secs <= limiter.sweep_interval_secs {
        errors.push(ValidationError::new(
            "limiter.idle_timeout_secs",
            "must be strictly greater than the sweep interval",
        ));
    }

    if config.body.max_bytes == 0 {
        errors.push(ValidationError::new("body.max_bytes", "must be at least one byte"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
