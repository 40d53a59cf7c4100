//! Per-client admission control subsystem.
//!
//! # Data Flow
//! ```text
//! Request arrives
//!     → middleware.rs (resolve client identity from peer address)
//!     → registry.rs (lookup-or-create entry, refresh last_seen)
//!     → bucket.rs (lazy refill, consume one token)
//!     → admit, or short-circuit with 429
//!
//! Once per sweep interval:
//!     sweeper.rs → registry.sweep() → drop entries idle past threshold
//! ```
//!
//! # Design Decisions
//! - One exclusive mutex guards the whole client map; lookups mutate
//!   last_seen, so there is no reader/writer split
//! - Critical sections are pure map/arithmetic work, never held across await
//! - Registry entries are created lazily and bounded by the sweeper, not
//!   by request history

pub mod bucket;
pub mod middleware;
pub mod registry;
pub mod sweeper;

pub use bucket::TokenBucket;
pub use registry::ClientRegistry;
pub use sweeper::EvictionSweeper;
