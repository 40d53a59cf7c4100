//! Observability subsystem.
//!
//! # Design Decisions
//! - Fatal faults log through `tracing` with method/URI context;
//!   client-caused rejections never log
//! - Counters go through the `metrics` facade; wiring an exporter is the
//!   host application's job

pub mod metrics;
