//! Route tree traversal.
//!
//! # Responsibilities
//! - Walk a nested route tree depth-first, siblings in declaration order
//! - Compose path prefixes and strip regex anchors
//! - Filter leaves against exclusion prefixes
//! - Emit one `RouteRecord` per surviving leaf
//!
//! # Design Decisions
//! - Exclusion is only checked at leaves; branches are always entered
//! - Paths are composed as new strings per call (no shared accumulator)
//! - No sorting, no deduplication: output order mirrors the tree
//! - A malformed node aborts the whole traversal

use thiserror::Error;

use crate::routing::handler::{extract, HandlerRef};
use crate::routing::path::{is_excluded, strip_anchors};
use crate::routing::record::RouteRecord;

/// Errors raised while walking a route tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// Node exposes both a handler and children, or neither.
    #[error("Unrecognized route node at '{path}': {reason}")]
    Structural { path: String, reason: &'static str },
}

/// Result type for route traversal.
pub type RouteResult<T> = Result<T, RouteError>;

/// A node in a route tree.
///
/// A node is a leaf when it exposes a handler and a branch when it exposes
/// children. Exposing both or neither is a structural error.
pub trait RouteEntry: Sized {
    type Handler: HandlerRef + ?Sized;

    /// Raw pattern fragment, possibly carrying `^` anchors.
    fn pattern(&self) -> &str;

    fn handler(&self) -> Option<&Self::Handler>;

    fn children(&self) -> Option<&[Self]>;
}

/// Resolved shape of a route node.
pub enum NodeShape<'a, N: RouteEntry> {
    Leaf { handler: &'a N::Handler },
    Branch { children: &'a [N] },
}

impl<'a, N: RouteEntry> NodeShape<'a, N> {
    /// Classify `node`; `path` is only used for error reporting.
    pub fn of(node: &'a N, path: &str) -> RouteResult<Self> {
        match (node.handler(), node.children()) {
            (Some(handler), None) => Ok(Self::Leaf { handler }),
            (None, Some(children)) => Ok(Self::Branch { children }),
            (Some(_), Some(_)) => Err(RouteError::Structural {
                path: path.to_string(),
                reason: "node has both a handler and nested routes",
            }),
            (None, None) => Err(RouteError::Structural {
                path: path.to_string(),
                reason: "node has neither a handler nor nested routes",
            }),
        }
    }
}

/// Flatten a route tree starting at its root nodes.
pub fn collect_routes<N, S>(nodes: &[N], exclude_prefixes: &[S]) -> RouteResult<Vec<RouteRecord>>
where
    N: RouteEntry,
    S: AsRef<str>,
{
    collect(nodes, "", exclude_prefixes)
}

/// Flatten `nodes`, composing each pattern onto `prefix`.
pub fn collect<N, S>(
    nodes: &[N],
    prefix: &str,
    exclude_prefixes: &[S],
) -> RouteResult<Vec<RouteRecord>>
where
    N: RouteEntry,
    S: AsRef<str>,
{
    let mut records = Vec::new();

    for node in nodes {
        let composed = strip_anchors(&format!("{}{}", prefix, node.pattern()));

        match NodeShape::of(node, &composed)? {
            NodeShape::Leaf { handler } => {
                if is_excluded(&composed, exclude_prefixes) {
                    tracing::debug!(path = %composed, "Route excluded");
                    continue;
                }
                records.push(extract(handler).into_record(composed));
            }
            NodeShape::Branch { children } => {
                tracing::trace!(
                    prefix = %composed,
                    children = children.len(),
                    "Entering nested routes"
                );
                records.extend(collect(children, &composed, exclude_prefixes)?);
            }
        }
    }

    Ok(records)
}
