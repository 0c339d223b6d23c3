//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from `route-audit.toml`.

use serde::{Deserialize, Serialize};

/// Root configuration for a route audit.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AuditConfig {
    /// Manifest discovery and route filtering.
    pub scan: ScanConfig,

    /// Report rendering.
    pub output: OutputConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Scan configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Routes whose normalized path starts with any of these are skipped.
    pub exclude_prefixes: Vec<String>,

    /// Manifest file names tried, in order, inside a project directory.
    pub manifest_names: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            exclude_prefixes: Vec::new(),
            manifest_names: vec!["routes.toml".to_string(), "routes.json".to_string()],
        }
    }
}

/// Report format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable listing.
    #[default]
    Text,
    /// Pretty-printed JSON array.
    Json,
}

/// Output configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuditConfig::default();
        assert!(config.scan.exclude_prefixes.is_empty());
        assert_eq!(config.scan.manifest_names, vec!["routes.toml", "routes.json"]);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: AuditConfig = toml::from_str(
            r#"
            [scan]
            exclude_prefixes = ["admin/"]

            [output]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.scan.exclude_prefixes, vec!["admin/"]);
        assert_eq!(config.scan.manifest_names.len(), 2);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.observability.log_level, "info");
    }
}
