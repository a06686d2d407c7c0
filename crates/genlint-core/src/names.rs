//! Candidate-name resolution for call sites
//!
//! A call site can be registered in configuration under several names.
//! Resolution returns them most specific first; the first name present
//! in the canonical map decides which entry governs. When both
//! `"Obj.method"` and `"*.method"` are configured, a call to
//! `Obj.method(...)` is judged against the exact entry.

use crate::callsite::{CallKind, CallSite, Callee};

/// Derive the names a call site could be registered under
///
/// - identifier callee `f` resolves to `["f"]`
/// - member callee `obj.prop` resolves to `["obj.prop", "*.prop", "prop"]`,
///   with missing pieces becoming the empty string
/// - a tagged template resolves to its tag name only when the tag is a
///   simple identifier
/// - everything else resolves to nothing and is never reported
pub fn candidate_names(site: &CallSite) -> Vec<String> {
    match (site.kind, &site.callee) {
        (CallKind::TaggedTemplate, Callee::Identifier(name)) => vec![name.clone()],
        (CallKind::TaggedTemplate, _) => Vec::new(),
        (_, Callee::Identifier(name)) => vec![name.clone()],
        (_, Callee::Member { object, property }) => {
            let object = object.as_deref().unwrap_or("");
            let property = property.as_deref().unwrap_or("");
            vec![
                format!("{}.{}", object, property),
                format!("*.{}", property),
                property.to_string(),
            ]
        }
        (_, Callee::Dynamic) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callsite::Span;

    fn site(kind: CallKind, callee: Callee) -> CallSite {
        CallSite {
            kind,
            callee,
            type_parameters: None,
            type_arguments: None,
            callee_span: Span { line: 1, column: 1 },
        }
    }

    #[test]
    fn test_identifier_callee() {
        let s = site(CallKind::Function, Callee::Identifier("useState".to_string()));
        assert_eq!(candidate_names(&s), vec!["useState"]);
    }

    #[test]
    fn test_constructor_identifier_callee() {
        let s = site(CallKind::Constructor, Callee::Identifier("Map".to_string()));
        assert_eq!(candidate_names(&s), vec!["Map"]);
    }

    #[test]
    fn test_member_callee_most_specific_first() {
        let s = site(
            CallKind::Function,
            Callee::Member {
                object: Some("collection".to_string()),
                property: Some("get".to_string()),
            },
        );
        assert_eq!(
            candidate_names(&s),
            vec!["collection.get", "*.get", "get"]
        );
    }

    #[test]
    fn test_member_callee_missing_object() {
        let s = site(
            CallKind::Function,
            Callee::Member {
                object: None,
                property: Some("get".to_string()),
            },
        );
        assert_eq!(candidate_names(&s), vec![".get", "*.get", "get"]);
    }

    #[test]
    fn test_member_callee_missing_property() {
        let s = site(
            CallKind::Function,
            Callee::Member {
                object: Some("obj".to_string()),
                property: None,
            },
        );
        assert_eq!(candidate_names(&s), vec!["obj.", "*.", ""]);
    }

    #[test]
    fn test_dynamic_callee_resolves_to_nothing() {
        let s = site(CallKind::Function, Callee::Dynamic);
        assert!(candidate_names(&s).is_empty());
    }

    #[test]
    fn test_tagged_template_identifier_tag() {
        let s = site(CallKind::TaggedTemplate, Callee::Identifier("sql".to_string()));
        assert_eq!(candidate_names(&s), vec!["sql"]);
    }

    #[test]
    fn test_tagged_template_member_tag_resolves_to_nothing() {
        let s = site(
            CallKind::TaggedTemplate,
            Callee::Member {
                object: Some("db".to_string()),
                property: Some("sql".to_string()),
            },
        );
        assert!(candidate_names(&s).is_empty());
    }
}
