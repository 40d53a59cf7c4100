//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     Signal received → broadcast to background tasks → sweeper drains
//! ```
//!
//! # Design Decisions
//! - The registry is memory-only and rebuilt from nothing on restart, so
//!   an abrupt kill is safe; cooperative shutdown just avoids cutting a
//!   sweep short
//! - One broadcast channel serves every background task the host spawns

pub mod shutdown;

pub use shutdown::Shutdown;
