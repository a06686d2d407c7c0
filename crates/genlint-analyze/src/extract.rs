//! Call-site extraction from tree-sitter trees
//!
//! Walks a parsed TypeScript tree and flattens every function call,
//! constructor invocation, and tagged template into the read-only
//! `CallSite` views the audit consumes. The core never sees tree-sitter
//! types; this module is the adapter for this particular host tree.

use crate::parser::{node_column, node_line, node_text};
use genlint_core::{CallKind, CallSite, Callee, Span};
use tree_sitter::{Node, Tree};

/// Extract every call site in the tree, in document order
pub fn extract_call_sites(tree: &Tree, source: &str) -> Vec<CallSite> {
    let mut sites = Vec::new();
    collect(tree.root_node(), source, &mut sites);
    sites
}

fn collect(node: Node<'_>, source: &str, sites: &mut Vec<CallSite>) {
    match node.kind() {
        "call_expression" => {
            if let Some(site) = call_site(node, source) {
                sites.push(site);
            }
        }
        "new_expression" => {
            if let Some(site) = new_site(node, source) {
                sites.push(site);
            }
        }
        _ => {}
    }

    // Recurse into every child so nested calls (arguments, callees,
    // template substitutions) are all visited.
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect(child, source, sites);
    }
}

/// A `call_expression` is a tagged template when its arguments are a
/// template string rather than a parenthesized list.
fn call_site(node: Node<'_>, source: &str) -> Option<CallSite> {
    let callee = node.child_by_field_name("function")?;
    let tagged = node
        .child_by_field_name("arguments")
        .is_some_and(|args| args.kind() == "template_string");
    let kind = if tagged {
        CallKind::TaggedTemplate
    } else {
        CallKind::Function
    };
    Some(build_site(kind, callee, node, source))
}

fn new_site(node: Node<'_>, source: &str) -> Option<CallSite> {
    let callee = node.child_by_field_name("constructor")?;
    Some(build_site(CallKind::Constructor, callee, node, source))
}

fn build_site(kind: CallKind, callee: Node<'_>, call: Node<'_>, source: &str) -> CallSite {
    CallSite {
        kind,
        callee: callee_shape(callee, source),
        type_parameters: None,
        type_arguments: type_argument_texts(call, source),
        callee_span: Span {
            line: node_line(&callee),
            column: node_column(&callee),
        },
    }
}

/// Map the callee/tag node onto the shapes the resolver understands.
/// Computed access (`obj[key]`) parses as `subscript_expression` and
/// lands in `Dynamic`, as does any other non-identifier shape.
fn callee_shape(node: Node<'_>, source: &str) -> Callee {
    match node.kind() {
        "identifier" => Callee::Identifier(node_text(&node, source).to_string()),
        "member_expression" => {
            let object = node
                .child_by_field_name("object")
                .filter(|n| n.kind() == "identifier")
                .map(|n| node_text(&n, source).to_string());
            let property = node
                .child_by_field_name("property")
                .filter(|n| n.kind() == "property_identifier")
                .map(|n| node_text(&n, source).to_string());
            Callee::Member { object, property }
        }
        _ => Callee::Dynamic,
    }
}

fn type_argument_texts(call: Node<'_>, source: &str) -> Option<Vec<String>> {
    let args = call.child_by_field_name("type_arguments")?;
    let mut cursor = args.walk();
    let texts = args
        .named_children(&mut cursor)
        .map(|child| node_text(&child, source).to_string())
        .collect();
    Some(texts)
}
