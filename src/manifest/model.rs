//! Route manifest schema.
//!
//! A manifest is a static description of an application's route table.
//! All types derive Serde traits for deserialization from TOML or JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::routing::handler::{HandlerRef, ViewClass};
use crate::routing::record::SchemaRef;
use crate::routing::tree::RouteEntry;

/// Root of a route manifest.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RouteManifest {
    /// Top-level route nodes, in declaration order.
    pub routes: Vec<RouteNode>,
}

/// A route node: a leaf when `handler` is set, a branch when `include` is set.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RouteNode {
    /// Raw pattern fragment (e.g., "^api/v1/").
    #[serde(default)]
    pub pattern: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handler: Option<HandlerSpec>,

    /// Nested routes sharing this node's pattern as prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<RouteNode>>,
}

impl RouteNode {
    pub fn leaf(pattern: impl Into<String>, handler: HandlerSpec) -> Self {
        Self {
            pattern: pattern.into(),
            handler: Some(handler),
            include: None,
        }
    }

    pub fn branch(pattern: impl Into<String>, include: Vec<RouteNode>) -> Self {
        Self {
            pattern: pattern.into(),
            handler: None,
            include: Some(include),
        }
    }
}

impl RouteEntry for RouteNode {
    type Handler = HandlerSpec;

    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn handler(&self) -> Option<&HandlerSpec> {
        self.handler.as_ref()
    }

    fn children(&self) -> Option<&[RouteNode]> {
        self.include.as_deref()
    }
}

/// Handler bound to a leaf route. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HandlerSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_methods: Option<Vec<String>>,

    /// Class backing this handler, for class-based views.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewSpec>,
}

impl fmt::Display for HandlerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.module, &self.name) {
            (Some(module), Some(name)) => write!(f, "<handler {}.{}>", module, name),
            (None, Some(name)) => write!(f, "<handler {}>", name),
            _ => write!(f, "<anonymous handler>"),
        }
    }
}

impl HandlerRef for HandlerSpec {
    fn view_class(&self) -> Option<&dyn ViewClass> {
        self.view.as_ref().map(|view| view as &dyn ViewClass)
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    fn allowed_methods(&self) -> Option<&[String]> {
        self.allowed_methods.as_deref()
    }
}

/// Class behind a class-based handler.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ViewSpec {
    pub name: String,

    pub module: String,

    /// Verb handlers the class defines, lowercase (e.g., ["get", "post"]).
    #[serde(default)]
    pub methods: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaRef>,
}

impl ViewClass for ViewSpec {
    fn name(&self) -> &str {
        &self.name
    }

    fn module(&self) -> &str {
        &self.module
    }

    fn responds_to(&self, verb: &str) -> bool {
        self.methods.iter().any(|m| m == verb)
    }

    fn schema(&self) -> Option<SchemaRef> {
        self.schema.clone()
    }
}
