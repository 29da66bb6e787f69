//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::theme::Theme;

/// Root configuration for the page helpers.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PageKitConfig {
    /// Debounce windows.
    pub debounce: DebounceConfig,

    /// AJAX form submission settings.
    pub ajax: AjaxConfig,

    /// Alert auto-dismiss settings.
    pub alerts: AlertConfig,

    /// Theme preference settings.
    pub theme: ThemeConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Debounce configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DebounceConfig {
    /// Quiet period before a search query is issued, in milliseconds.
    pub search_wait_ms: u64,
}

impl DebounceConfig {
    pub fn search_wait(&self) -> Duration {
        Duration::from_millis(self.search_wait_ms)
    }
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self { search_wait_ms: 300 }
    }
}

/// AJAX submission configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AjaxConfig {
    /// Value of the `X-Requested-With` marker header.
    pub requested_with: String,

    /// Whole-request timeout in seconds. 0 disables the timeout.
    pub request_timeout_secs: u64,
}

impl AjaxConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

impl Default for AjaxConfig {
    fn default() -> Self {
        Self {
            requested_with: "XMLHttpRequest".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Alert auto-dismiss configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Delay before a non-permanent alert is closed, in milliseconds.
    pub dismiss_after_ms: u64,
}

impl AlertConfig {
    pub fn dismiss_after(&self) -> Duration {
        Duration::from_millis(self.dismiss_after_ms)
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self { dismiss_after_ms: 5000 }
    }
}

/// Theme preference configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ThemeConfig {
    /// Theme used when nothing has been saved.
    pub default: Theme,

    /// JSON file backing the preference store. In-memory when unset.
    pub store_path: Option<PathBuf>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
