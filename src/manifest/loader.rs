//! Manifest discovery and loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::manifest::model::RouteManifest;

/// Error type for manifest discovery and parsing.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The project path itself does not exist.
    #[error("Project path not found: {}", .0.display())]
    ProjectNotFound(PathBuf),

    /// No manifest file was found in the project directory.
    #[error("No route manifest found in {}; tried: {}", .dir.display(), .tried.join(", "))]
    NotFound { dir: PathBuf, tried: Vec<String> },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File extension is neither `.toml` nor `.json`.
    #[error("Unsupported manifest format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Invalid TOML manifest {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid JSON manifest {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for manifest operations.
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Resolve the manifest file for a project.
///
/// A file path is used as-is. For a directory, the first existing entry of
/// `candidates` wins.
pub fn locate_manifest<S: AsRef<str>>(project: &Path, candidates: &[S]) -> ManifestResult<PathBuf> {
    if project.is_file() {
        return Ok(project.to_path_buf());
    }
    if !project.is_dir() {
        return Err(ManifestError::ProjectNotFound(project.to_path_buf()));
    }

    for name in candidates {
        let candidate = project.join(name.as_ref());
        tracing::debug!(path = %candidate.display(), "Looking for route manifest");
        if candidate.is_file() {
            tracing::info!(path = %candidate.display(), "Found route manifest");
            return Ok(candidate);
        }
    }

    Err(ManifestError::NotFound {
        dir: project.to_path_buf(),
        tried: candidates.iter().map(|c| c.as_ref().to_string()).collect(),
    })
}

/// Load and parse a manifest, picking the format from the file extension.
pub fn load_manifest(path: &Path) -> ManifestResult<RouteManifest> {
    let content = fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let manifest: RouteManifest = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|source| ManifestError::Toml {
            path: path.to_path_buf(),
            source,
        })?,
        Some("json") => serde_json::from_str(&content).map_err(|source| ManifestError::Json {
            path: path.to_path_buf(),
            source,
        })?,
        _ => return Err(ManifestError::UnsupportedFormat(path.to_path_buf())),
    };

    tracing::debug!(
        path = %path.display(),
        top_level_routes = manifest.routes.len(),
        "Route manifest parsed"
    );

    Ok(manifest)
}
