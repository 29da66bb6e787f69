//! Configuration loading from disk.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::PageKitConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<PageKitConfig, ConfigError> {
    let config: PageKitConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<PageKitConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    tracing::debug!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.debounce.search_wait_ms, 300);
        assert_eq!(config.alerts.dismiss_after_ms, 5000);
        assert_eq!(config.ajax.requested_with, "XMLHttpRequest");
        assert_eq!(config.theme.default, Theme::Light);
    }

    #[test]
    fn test_partial_config() {
        let config = parse_config(
            r#"
            [debounce]
            search_wait_ms = 150

            [theme]
            default = "dark"
            store_path = "/tmp/prefs.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.debounce.search_wait_ms, 150);
        assert_eq!(config.theme.default, Theme::Dark);
        assert!(config.theme.store_path.is_some());
        assert_eq!(config.ajax.request_timeout_secs, 30);
    }

    #[test]
    fn test_unknown_theme_is_parse_error() {
        let err = parse_config("[theme]\ndefault = \"sepia\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_errors_are_reported() {
        let err = parse_config("[observability]\nlog_level = \"loud\"").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref v) if v.len() == 1));
        assert!(err.to_string().contains("observability.log_level"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[alerts]\ndismiss_after_ms = 100").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.alerts.dismiss_after_ms, 100);
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/pagekit.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
