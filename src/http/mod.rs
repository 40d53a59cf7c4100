//! HTTP surface of the gate.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → recover.rs (outermost fault barrier)
//!     → cors.rs (vary headers, preflight short-circuit)
//!     → [admission layer decides 429]
//!     → handler calls body.rs (strict decode, classified failures)
//!     → handler result
//!     → envelope.rs (tab-indented JSON + trailing newline)
//!
//! Any failure, anywhere
//!     → errors.rs (one constructor per outcome, all through envelope.rs)
//! ```
//!
//! # Design Decisions
//! - Exactly one code path turns any outcome into bytes on the wire
//! - Client-caused rejections (400/404/405/422/429) are never logged
//! - Fatal outcomes (500) log method and URI; the client sees only a
//!   fixed generic message

pub mod body;
pub mod cors;
pub mod envelope;
pub mod errors;
pub mod gate;
pub mod healthcheck;
pub mod recover;

pub use body::{decode_json, read_json, BodyError, DEFAULT_MAX_BODY_BYTES};
pub use envelope::write_json;
pub use gate::{Gate, GateState};
