//! Request-processing gate for JSON APIs.
//!
//! A library layer that wraps application handlers with admission control,
//! strict body decoding, and fault containment. Every request passes through
//! the same chain and every failure leaves through the same envelope.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌────────────────────────────────────────────────┐
//!                       │                 REQUEST GATE                    │
//!                       │                                                 │
//!   Client Request      │  ┌─────────┐   ┌──────┐   ┌───────────┐        │
//!   ────────────────────┼─▶│ recover │──▶│ cors │──▶│ admission │──▶ ... ┼──▶ Handlers
//!                       │  │ (panic) │   │      │   │  (429?)   │        │    (app-owned)
//!                       │  └─────────┘   └──────┘   └─────┬─────┘        │
//!                       │                                 │              │
//!                       │                                 ▼              │
//!                       │                         ┌──────────────┐       │
//!                       │                         │ClientRegistry│◀──────┼── EvictionSweeper
//!                       │                         │ (per-client  │       │   (background task)
//!                       │                         │token buckets)│       │
//!                       │                         └──────────────┘       │
//!                       │                                                 │
//!   Client Response     │  ┌──────────────────────────────────────────┐  │
//!   ◀───────────────────┼──│ envelope writer (tab-indented JSON + \n) │◀─┼─── Handlers
//!                       │  └──────────────────────────────────────────┘  │
//!                       │                                                 │
//!                       │  ┌────────────────────────────────────────────┐│
//!                       │  │            Cross-Cutting Concerns          ││
//!                       │  │  config    lifecycle    observability      ││
//!                       │  └────────────────────────────────────────────┘│
//!                       └────────────────────────────────────────────────┘
//! ```
//!
//! The gate has no listener and no CLI of its own; the host application
//! builds a router, calls [`Gate::apply`], and serves it with connection
//! info enabled so the admission layer can see peer addresses.

// Core subsystems
pub mod admission;
pub mod config;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;
pub mod validation;

pub use config::GateConfig;
pub use http::gate::{Gate, GateState};
pub use lifecycle::Shutdown;
