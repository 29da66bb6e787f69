//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check header values are sendable
//! - Check the log level is one `tracing` understands
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: PageKitConfig → Result<(), Vec<ValidationError>>

use reqwest::header::HeaderValue;
use std::fmt;

use crate::config::schema::PageKitConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub fn validate_config(config: &PageKitConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let marker = &config.ajax.requested_with;
    if marker.trim().is_empty() {
        errors.push(ValidationError {
            field: "ajax.requested_with",
            message: "must not be empty".to_string(),
        });
    } else if HeaderValue::from_str(marker).is_err() {
        errors.push(ValidationError {
            field: "ajax.requested_with",
            message: format!("'{}' is not a valid header value", marker),
        });
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError {
            field: "observability.log_level",
            message: format!(
                "'{}' is not one of {}",
                config.observability.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if let Some(path) = &config.theme.store_path {
        if path.as_os_str().is_empty() {
            errors.push(ValidationError {
                field: "theme.store_path",
                message: "must not be empty when set".to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&PageKitConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = PageKitConfig::default();
        config.ajax.requested_with = "bad\nvalue".to_string();
        config.observability.log_level = "verbose".to_string();
        config.theme.store_path = Some(Default::default());

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec!["ajax.requested_with", "observability.log_level", "theme.store_path"]
        );
    }

    #[test]
    fn test_log_level_case_insensitive() {
        let mut config = PageKitConfig::default();
        config.observability.log_level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
