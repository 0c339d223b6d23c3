//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Root route nodes + exclusion prefixes
//!     → tree.rs (depth-first walk, prefix composition)
//!     → path.rs (anchor stripping, exclusion check)
//!     → handler.rs (function vs class metadata)
//!     → Return: Vec<RouteRecord> in declaration order
//! ```
//!
//! # Design Decisions
//! - Pure transform over an immutable tree; no I/O, no shared state
//! - Node and handler shapes are resolved once, then matched exhaustively
//! - Deterministic: same tree always yields the same records in the same order

pub mod handler;
pub mod path;
pub mod record;
pub mod tree;

pub use handler::{extract, HandlerRef, ViewClass};
pub use path::{is_excluded, normalize, strip_anchors};
pub use record::{HandlerKind, HandlerMetadata, RouteRecord, SchemaRef};
pub use tree::{collect, collect_routes, RouteEntry, RouteError};
