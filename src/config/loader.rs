//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::GateConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<GateConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<GateConfig, ConfigError> {
    let config: GateConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_design_defaults() {
        let config = parse_config("").unwrap();
        assert!(config.limiter.enabled);
        assert_eq!(config.limiter.rps, 2.0);
        assert_eq!(config.limiter.burst, 5);
        assert_eq!(config.limiter.sweep_interval_secs, 60);
        assert_eq!(config.limiter.idle_timeout_secs, 180);
        assert_eq!(config.body.max_bytes, 256_000);
        assert!(config.cors.trusted_origins.is_empty());
    }

    #[test]
    fn partial_overrides_keep_remaining_defaults() {
        let config = parse_config(
            r#"
            [limiter]
            rps = 10.0
            burst = 20

            [cors]
            trusted_origins = ["https://app.example.com"]
            "#,
        )
        .unwrap();
        assert_eq!(config.limiter.rps, 10.0);
        assert_eq!(config.limiter.burst, 20);
        assert!(config.limiter.enabled);
        assert_eq!(config.cors.trusted_origins, vec!["https://app.example.com"]);
    }

    #[test]
    fn semantic_violations_are_reported() {
        let err = parse_config(
            r#"
            [limiter]
            burst = 0
            sweep_interval_secs = 120
            idle_timeout_secs = 60
            "#,
        )
        .unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation failure, got {other}"),
        }
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = parse_config("limiter = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
