//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → GateConfig (validated, immutable)
//!     → shared via Arc with the gate's middleware and sweeper
//! ```
//!
//! # Design Decisions
//! - Config is a read-only input to the gate; how it is sourced beyond
//!   the TOML loader (flags, environment) is the host application's job
//! - All fields have defaults carrying the design values, so a minimal
//!   config is a valid config
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{BodyConfig, CorsConfig, GateConfig, LimiterConfig, ServiceConfig};
pub use validation::{validate_config, ValidationError};
