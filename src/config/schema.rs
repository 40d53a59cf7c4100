//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::http::body::DEFAULT_MAX_BODY_BYTES;

/// Root configuration for the request gate.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GateConfig {
    /// Service identity reported by the healthcheck.
    pub service: ServiceConfig,

    /// Admission control settings.
    pub limiter: LimiterConfig,

    /// Request body settings.
    pub body: BodyConfig,

    /// CORS settings.
    pub cors: CorsConfig,
}

/// Service identity.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Deployment environment (development|staging|production).
    pub environment: String,

    /// Version string reported to clients.
    pub version: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            version: "1.0.0".to_string(),
        }
    }
}

/// Admission control configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimiterConfig {
    /// Enable per-client admission control. When false, every request is
    /// admitted and the registry is never touched.
    pub enabled: bool,

    /// Sustained admission rate in requests per second per client.
    pub rps: f64,

    /// Maximum burst per client.
    pub burst: u32,

    /// Seconds between eviction sweeps of the client registry.
    pub sweep_interval_secs: u64,

    /// Seconds a client may stay idle before eviction. Must be strictly
    /// greater than the sweep interval.
    pub idle_timeout_secs: u64,
}

impl Default for LimiterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rps: 2.0,
            burst: 5,
            sweep_interval_secs: 60,
            idle_timeout_secs: 180,
        }
    }
}

/// Request body configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BodyConfig {
    /// Maximum request body size in bytes.
    pub max_bytes: usize,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CorsConfig {
    /// Origins allowed to make cross-origin requests. Exact match.
    pub trusted_origins: Vec<String>,
}
