//! Debounce subsystem.
//!
//! # Data Flow
//! ```text
//! Debouncer::call(args)
//!     → timer.rs: cancel pending timer, bump generation
//!     → spawn sleep(wait) task for the new generation
//!     → task wakes, claims its generation
//!         → still current: run callback(args)
//!         → superseded: exit silently
//! ```
//!
//! # Design Decisions
//! - The timer is owned by the Debouncer instance, never module-level state
//! - At most one pending timer per instance; generation check rules out stale fires
//! - Callbacks run on the Tokio runtime, never synchronously inside `call`

pub mod debouncer;
pub mod timer;

pub use debouncer::Debouncer;
