//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AuditConfig;
use crate::config::validation::{excludes_everything, validate_config, ValidationError};

/// Config file looked up inside the project directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "route-audit.toml";

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

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AuditConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AuditConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Resolve the configuration for a run.
///
/// An explicit path must exist. Otherwise `route-audit.toml` in the project
/// directory is used when present, falling back to defaults.
pub fn resolve_config(explicit: Option<&Path>, project: &Path) -> Result<AuditConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    let candidate = project.join(DEFAULT_CONFIG_FILE);
    if project.is_dir() && candidate.is_file() {
        return load_config(&candidate);
    }

    Ok(AuditConfig::default())
}

/// Append exclusion prefixes given on the command line.
///
/// Not validated like file prefixes: one that matches every route is kept
/// and logged as a warning.
pub fn add_cli_exclude_prefixes(config: &mut AuditConfig, prefixes: Vec<String>) {
    for prefix in prefixes {
        if excludes_everything(&prefix) {
            tracing::warn!(prefix = %prefix, "Exclude prefix matches every route");
        }
        config.scan.exclude_prefixes.push(prefix);
    }
}
