//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! route-audit.toml (explicit --config, or found in the project directory)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AuditConfig (validated, immutable)
//!     → CLI flags layered on top
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; a missing file means default config
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, resolve_config, ConfigError};
pub use schema::{AuditConfig, ObservabilityConfig, OutputConfig, OutputFormat, ScanConfig};
pub use validation::ValidationError;
