//! Route records produced by a traversal.

use serde::{Deserialize, Serialize};

/// Named request/response schema bound to a class-based handler.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct SchemaRef {
    /// Schema class name (e.g., "ItemSchema").
    pub name: String,
    /// Module defining the schema (e.g., "shop.serializers").
    pub module: String,
}

impl SchemaRef {
    pub fn new(name: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module: module.into(),
        }
    }

    /// Dotted `module.name` form.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.module, self.name)
    }
}

/// Which extractor branch described a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlerKind {
    /// Single callable handler.
    Function,
    /// Class-shaped handler with per-verb behavior.
    Class,
}

/// Handler description without a path, as returned by the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerMetadata {
    pub name: String,
    pub module: String,
    pub kind: HandlerKind,
    pub methods: Vec<String>,
    pub schema: Option<SchemaRef>,
}

impl HandlerMetadata {
    /// Attach the route path, producing the final record.
    pub fn into_record(self, path: impl Into<String>) -> RouteRecord {
        RouteRecord {
            path: path.into(),
            handler_name: self.name,
            handler_module: self.module,
            kind: self.kind,
            methods: self.methods,
            schema: self.schema,
        }
    }
}

/// One reachable endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteRecord {
    /// Composed, anchor-stripped path as declared in the route tree.
    pub path: String,

    pub handler_name: String,

    pub handler_module: String,

    pub kind: HandlerKind,

    /// Supported HTTP methods, in extraction order.
    pub methods: Vec<String>,

    /// Bound schema, class-based handlers only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaRef>,
}

impl RouteRecord {
    /// Dotted `module.name` form of the handler.
    pub fn qualified_handler(&self) -> String {
        format!("{}.{}", self.handler_module, self.handler_name)
    }
}
