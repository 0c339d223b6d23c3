//! Shared in-memory route trees for integration tests.

use std::fmt;

use route_audit::routing::{HandlerRef, RouteEntry, SchemaRef, ViewClass};

/// Function-style handler with optional attributes.
#[derive(Default)]
pub struct FnHandler {
    pub name: Option<&'static str>,
    pub module: Option<&'static str>,
    pub methods: Option<Vec<String>>,
}

impl fmt::Display for FnHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<function {:p}>", self)
    }
}

impl HandlerRef for FnHandler {
    fn name(&self) -> Option<&str> {
        self.name
    }

    fn module(&self) -> Option<&str> {
        self.module
    }

    fn allowed_methods(&self) -> Option<&[String]> {
        self.methods.as_deref()
    }
}

/// Class defining a subset of verb handlers.
pub struct ViewType {
    pub name: &'static str,
    pub module: &'static str,
    pub verbs: Vec<&'static str>,
    pub schema: Option<SchemaRef>,
}

impl ViewClass for ViewType {
    fn name(&self) -> &str {
        self.name
    }

    fn module(&self) -> &str {
        self.module
    }

    fn responds_to(&self, verb: &str) -> bool {
        self.verbs.iter().any(|v| *v == verb)
    }

    fn schema(&self) -> Option<SchemaRef> {
        self.schema.clone()
    }
}

/// Handler produced by binding a class.
pub struct ClassHandler(pub ViewType);

impl fmt::Display for ClassHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<bound {}>", self.0.name)
    }
}

impl HandlerRef for ClassHandler {
    fn view_class(&self) -> Option<&dyn ViewClass> {
        Some(&self.0)
    }
}

/// Route tree node; `Malformed` exposes neither a handler nor children.
pub enum Node {
    Leaf(&'static str, Box<dyn HandlerRef>),
    Branch(&'static str, Vec<Node>),
    Malformed(&'static str),
}

impl RouteEntry for Node {
    type Handler = dyn HandlerRef;

    fn pattern(&self) -> &str {
        match self {
            Node::Leaf(p, _) | Node::Branch(p, _) | Node::Malformed(p) => p,
        }
    }

    fn handler(&self) -> Option<&Self::Handler> {
        match self {
            Node::Leaf(_, h) => Some(&**h),
            _ => None,
        }
    }

    fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Branch(_, c) => Some(c.as_slice()),
            _ => None,
        }
    }
}

pub fn function(name: &'static str, methods: &[&str]) -> Box<dyn HandlerRef> {
    Box::new(FnHandler {
        name: Some(name),
        module: Some("shop.views"),
        methods: Some(methods.iter().map(|m| m.to_string()).collect()),
    })
}

pub fn view(
    name: &'static str,
    verbs: &[&'static str],
    schema: Option<&str>,
) -> Box<dyn HandlerRef> {
    Box::new(ClassHandler(ViewType {
        name,
        module: "shop.views",
        verbs: verbs.to_vec(),
        schema: schema.map(|s| SchemaRef::new(s, "shop.serializers")),
    }))
}

pub fn leaf(pattern: &'static str, handler: Box<dyn HandlerRef>) -> Node {
    Node::Leaf(pattern, handler)
}

pub fn branch(pattern: &'static str, children: Vec<Node>) -> Node {
    Node::Branch(pattern, children)
}
