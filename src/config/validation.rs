//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject exclusion prefixes that would hide every route
//! - Check manifest names and log level
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AuditConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::AuditConfig;
use crate::routing::path::normalize;

/// Accepted values for `observability.log_level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("exclude prefix {0:?} matches every route")]
    ExcludesEverything(String),

    #[error("scan.manifest_names must not be empty")]
    NoManifestNames,

    #[error("scan.manifest_names contains an empty name")]
    EmptyManifestName,

    #[error("unknown log level {0:?}")]
    UnknownLogLevel(String),
}

/// True for a prefix that normalizes to `/` and therefore hides every route.
pub fn excludes_everything(prefix: &str) -> bool {
    normalize(prefix) == "/"
}

/// Validate a configuration, collecting every problem.
pub fn validate_config(config: &AuditConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for prefix in &config.scan.exclude_prefixes {
        if excludes_everything(prefix) {
            errors.push(ValidationError::ExcludesEverything(prefix.clone()));
        }
    }

    if config.scan.manifest_names.is_empty() {
        errors.push(ValidationError::NoManifestNames);
    } else if config.scan.manifest_names.iter().any(|n| n.trim().is_empty()) {
        errors.push(ValidationError::EmptyManifestName);
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
