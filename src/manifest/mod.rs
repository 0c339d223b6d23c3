//! Route manifest subsystem.
//!
//! # Data Flow
//! ```text
//! project path (file or directory)
//!     → loader.rs (locate manifest, parse TOML/JSON)
//!     → model.rs (RouteManifest: RouteNode tree with HandlerSpec leaves)
//!     → handed to routing::collect_routes
//!
//! In watch mode:
//!     watcher.rs detects change
//!     → caller reloads and rescans
//! ```
//!
//! # Design Decisions
//! - Format chosen by file extension, no content sniffing
//! - Node shape is not checked while parsing; the collector reports malformed nodes
//!   with their composed path

pub mod loader;
pub mod model;
pub mod watcher;

pub use loader::{load_manifest, locate_manifest, ManifestError};
pub use model::{HandlerSpec, RouteManifest, RouteNode, ViewSpec};
pub use watcher::ManifestWatcher;
