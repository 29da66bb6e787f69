//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! pagekit.toml
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → PageKitConfig (validated, immutable)
//!     → sections handed to the helpers that use them
//! ```
//!
//! # Design Decisions
//! - Every field has a default; an empty file is a valid config
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    AjaxConfig, AlertConfig, DebounceConfig, ObservabilityConfig, PageKitConfig, ThemeConfig,
};
