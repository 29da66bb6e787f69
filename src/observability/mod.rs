//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Helpers produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters through the metrics facade)
//!
//! Consumers:
//!     → stderr (tracing-subscriber fmt layer)
//!     → whatever metrics recorder the host installs
//! ```
//!
//! # Design Decisions
//! - Each AJAX submission runs in a span carrying a UUID v4 submission id
//! - Metrics are no-ops until the host installs a recorder

pub mod logging;
pub mod metrics;
