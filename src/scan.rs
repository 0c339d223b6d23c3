//! Scan orchestration.
//!
//! # Responsibilities
//! - Locate and load a project's route manifest
//! - Flatten it into route records using the configured exclusions
//!
//! # Design Decisions
//! - Fail fast: a missing manifest or malformed node ends the scan
//! - Each scan reloads the manifest from disk (watch mode relies on this)

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::ScanConfig;
use crate::manifest::{load_manifest, locate_manifest, ManifestError};
use crate::routing::{collect_routes, RouteError, RouteRecord};

/// Errors that end a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Route(#[from] RouteError),
}

/// Outcome of one scan.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Manifest the routes were read from.
    pub manifest: PathBuf,
    pub routes: Vec<RouteRecord>,
}

/// Scan a project (manifest file or directory containing one).
pub fn scan_project(project: &Path, config: &ScanConfig) -> Result<ScanReport, ScanError> {
    let manifest_path = locate_manifest(project, &config.manifest_names)?;
    scan_manifest(&manifest_path, &config.exclude_prefixes)
}

/// Scan a known manifest file.
pub fn scan_manifest<S: AsRef<str>>(
    manifest_path: &Path,
    exclude_prefixes: &[S],
) -> Result<ScanReport, ScanError> {
    let manifest = load_manifest(manifest_path)?;
    let routes = collect_routes(&manifest.routes, exclude_prefixes)?;

    tracing::info!(
        manifest = %manifest_path.display(),
        routes = routes.len(),
        excluded_prefixes = exclude_prefixes.len(),
        "Route scan complete"
    );

    Ok(ScanReport {
        manifest: manifest_path.to_path_buf(),
        routes,
    })
}
