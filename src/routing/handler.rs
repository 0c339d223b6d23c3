//! Handler metadata extraction.
//!
//! # Responsibilities
//! - Decide once whether a handler is function-shaped or class-shaped
//! - Describe both shapes with one `HandlerMetadata` record
//!
//! # Design Decisions
//! - Dispatch on exposed capabilities, not on concrete types
//! - Every optional capability has a fallback; extraction cannot fail
//! - Class handlers derive methods from a fixed verb order and may end up with none;
//!   function handlers default to `GET`

use std::fmt;

use crate::routing::record::{HandlerKind, HandlerMetadata, SchemaRef};

/// Verb capabilities checked on class handlers, in output order.
pub const VERBS: [&str; 5] = ["get", "post", "put", "patch", "delete"];

/// Methods assumed for a function handler that declares none.
pub const DEFAULT_METHODS: [&str; 1] = ["GET"];

/// Module reported for a function handler that does not expose one.
pub const UNKNOWN_MODULE: &str = "unknown";

/// Observable capabilities of a request handler.
///
/// Every accessor defaults to "absent". `Display` renders the handler
/// reference itself and is used when no name is exposed.
pub trait HandlerRef: fmt::Display {
    /// Bound class, if this handler is class-shaped.
    fn view_class(&self) -> Option<&dyn ViewClass> {
        None
    }

    fn name(&self) -> Option<&str> {
        None
    }

    fn module(&self) -> Option<&str> {
        None
    }

    /// Explicitly declared methods, kept verbatim.
    ///
    /// `None` means the `GET` default applies. An explicit empty list is kept
    /// as declared, leaving the handler with no methods.
    fn allowed_methods(&self) -> Option<&[String]> {
        None
    }
}

/// Capabilities of the class bound to a class-shaped handler.
pub trait ViewClass {
    fn name(&self) -> &str;

    fn module(&self) -> &str;

    /// Whether the class defines behavior for a lowercase verb such as `"get"`.
    fn responds_to(&self, verb: &str) -> bool;

    fn schema(&self) -> Option<SchemaRef> {
        None
    }
}

/// Handler shape, resolved by a single capability check.
pub enum HandlerShape<'a, H: ?Sized> {
    Simple(&'a H),
    Structured(&'a dyn ViewClass),
}

impl<'a, H: HandlerRef + ?Sized> HandlerShape<'a, H> {
    pub fn of(handler: &'a H) -> Self {
        match handler.view_class() {
            Some(class) => Self::Structured(class),
            None => Self::Simple(handler),
        }
    }
}

/// Describe a handler. Never fails.
pub fn extract<H: HandlerRef + ?Sized>(handler: &H) -> HandlerMetadata {
    match HandlerShape::of(handler) {
        HandlerShape::Structured(class) => describe_class(class),
        HandlerShape::Simple(handler) => describe_function(handler),
    }
}

fn describe_class(class: &dyn ViewClass) -> HandlerMetadata {
    let methods = VERBS
        .iter()
        .filter(|verb| class.responds_to(verb))
        .map(|verb| verb.to_uppercase())
        .collect();

    HandlerMetadata {
        name: class.name().to_string(),
        module: class.module().to_string(),
        kind: HandlerKind::Class,
        methods,
        schema: class.schema(),
    }
}

fn describe_function<H: HandlerRef + ?Sized>(handler: &H) -> HandlerMetadata {
    let name = match handler.name() {
        Some(name) => name.to_string(),
        None => {
            let rendered = handler.to_string();
            if rendered.is_empty() {
                "<anonymous>".to_string()
            } else {
                rendered
            }
        }
    };

    let methods = match handler.allowed_methods() {
        Some(methods) => methods.to_vec(),
        None => DEFAULT_METHODS.iter().map(|m| m.to_string()).collect(),
    };

    HandlerMetadata {
        name,
        module: handler.module().unwrap_or(UNKNOWN_MODULE).to_string(),
        kind: HandlerKind::Function,
        methods,
        schema: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;

    impl fmt::Display for Bare {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "<function at 0x1>")
        }
    }

    impl HandlerRef for Bare {}

    struct Silent;

    impl fmt::Display for Silent {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Ok(())
        }
    }

    impl HandlerRef for Silent {}

    struct Func {
        methods: Vec<String>,
    }

    impl fmt::Display for Func {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "func")
        }
    }

    impl HandlerRef for Func {
        fn name(&self) -> Option<&str> {
            Some("create_order")
        }

        fn module(&self) -> Option<&str> {
            Some("shop.views")
        }

        fn allowed_methods(&self) -> Option<&[String]> {
            Some(self.methods.as_slice())
        }
    }

    struct Class {
        verbs: Vec<&'static str>,
        schema: Option<SchemaRef>,
    }

    impl ViewClass for Class {
        fn name(&self) -> &str {
            "OrderView"
        }

        fn module(&self) -> &str {
            "shop.views"
        }

        fn responds_to(&self, verb: &str) -> bool {
            self.verbs.iter().any(|v| *v == verb)
        }

        fn schema(&self) -> Option<SchemaRef> {
            self.schema.clone()
        }
    }

    struct Bound(Class);

    impl fmt::Display for Bound {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "bound")
        }
    }

    impl HandlerRef for Bound {
        fn view_class(&self) -> Option<&dyn ViewClass> {
            Some(&self.0)
        }

        fn name(&self) -> Option<&str> {
            Some("view")
        }
    }

    #[test]
    fn test_function_defaults() {
        let meta = extract(&Bare);
        assert_eq!(meta.kind, HandlerKind::Function);
        assert_eq!(meta.name, "<function at 0x1>");
        assert_eq!(meta.module, "unknown");
        assert_eq!(meta.methods, vec!["GET"]);
        assert!(meta.schema.is_none());
    }

    #[test]
    fn test_function_empty_rendering_still_named() {
        let meta = extract(&Silent);
        assert!(!meta.name.is_empty());
        assert_eq!(meta.module, "unknown");
    }

    #[test]
    fn test_function_methods_kept_verbatim() {
        let handler = Func {
            methods: vec!["post".into(), "GET".into()],
        };
        let meta = extract(&handler);
        assert_eq!(meta.name, "create_order");
        assert_eq!(meta.module, "shop.views");
        assert_eq!(meta.methods, vec!["post", "GET"]);
    }

    #[test]
    fn test_function_explicit_empty_methods_kept() {
        let handler = Func { methods: vec![] };
        let meta = extract(&handler);
        assert_eq!(meta.kind, HandlerKind::Function);
        assert!(meta.methods.is_empty());
    }

    #[test]
    fn test_class_methods_in_verb_order() {
        let handler = Bound(Class {
            verbs: vec!["delete", "get", "patch"],
            schema: None,
        });
        let meta = extract(&handler);
        assert_eq!(meta.kind, HandlerKind::Class);
        // Class name wins over the handler's own name.
        assert_eq!(meta.name, "OrderView");
        assert_eq!(meta.methods, vec!["GET", "PATCH", "DELETE"]);
        assert!(meta.schema.is_none());
    }

    #[test]
    fn test_class_without_verbs_has_no_methods() {
        let handler = Bound(Class {
            verbs: vec![],
            schema: None,
        });
        assert!(extract(&handler).methods.is_empty());
    }

    #[test]
    fn test_class_schema() {
        let handler = Bound(Class {
            verbs: vec!["get"],
            schema: Some(SchemaRef::new("OrderSchema", "shop.serializers")),
        });
        let meta = extract(&handler);
        assert_eq!(
            meta.schema,
            Some(SchemaRef::new("OrderSchema", "shop.serializers"))
        );
    }
}
