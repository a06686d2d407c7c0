//! Read-only call-site views extracted from a host syntax tree
//!
//! The audit never touches a parser. The host flattens each function
//! call, constructor call, or tagged-template invocation into a
//! `CallSite` and hands it over; the view is immutable from then on.

/// Kind of invocation a call site represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    /// A plain function or method call: `foo(...)`, `obj.get(...)`
    Function,
    /// A constructor invocation: `new Foo(...)`
    Constructor,
    /// A tagged template literal: `` query`...` ``
    TaggedTemplate,
}

impl CallKind {
    /// Label used in diagnostic messages
    pub fn label(&self) -> &'static str {
        match self {
            CallKind::Function => "Function",
            CallKind::Constructor => "Constructor",
            CallKind::TaggedTemplate => "Tagged template",
        }
    }
}

/// Shape of the callee (or tag) expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Callee {
    /// A simple identifier: `useState(...)`
    Identifier(String),
    /// A member access: `collection.get(...)`. Either side is `None`
    /// when it is not itself a simple identifier.
    Member {
        object: Option<String>,
        property: Option<String>,
    },
    /// Computed access, call results, and every other callee shape.
    /// Never matched against configuration.
    Dynamic,
}

/// 1-based source position of the callee/tag expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

/// One call site as seen by the audit
#[derive(Debug, Clone)]
pub struct CallSite {
    pub kind: CallKind,
    pub callee: Callee,
    /// Explicit generics attached as a parameter-declaration list
    pub type_parameters: Option<Vec<String>>,
    /// Explicit generics attached as a type-argument list
    pub type_arguments: Option<Vec<String>>,
    /// Position of the callee/tag expression (diagnostics anchor here,
    /// not on the whole call)
    pub callee_span: Span,
}

impl CallSite {
    /// Number of explicit generics written at the call site. Prefers the
    /// parameter list when both sequences are attached; absence of both
    /// means zero.
    pub fn explicit_generic_count(&self) -> usize {
        self.type_parameters
            .as_ref()
            .or(self.type_arguments.as_ref())
            .map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(type_parameters: Option<Vec<String>>, type_arguments: Option<Vec<String>>) -> CallSite {
        CallSite {
            kind: CallKind::Function,
            callee: Callee::Identifier("f".to_string()),
            type_parameters,
            type_arguments,
            callee_span: Span { line: 1, column: 1 },
        }
    }

    #[test]
    fn test_count_absent_both() {
        assert_eq!(site(None, None).explicit_generic_count(), 0);
    }

    #[test]
    fn test_count_type_arguments_only() {
        let s = site(None, Some(vec!["string".into(), "number".into()]));
        assert_eq!(s.explicit_generic_count(), 2);
    }

    #[test]
    fn test_count_prefers_type_parameters() {
        let s = site(Some(vec!["T".into()]), Some(vec!["A".into(), "B".into()]));
        assert_eq!(s.explicit_generic_count(), 1);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(CallKind::Function.label(), "Function");
        assert_eq!(CallKind::Constructor.label(), "Constructor");
        assert_eq!(CallKind::TaggedTemplate.label(), "Tagged template");
    }
}
