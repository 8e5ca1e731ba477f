use std::collections::BTreeSet;
use tree_sitter::Node as TSNode;

use crate::parsers::common::extract_text;

/// Callee expression shapes that produce a name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalleeShape {
    Identifier,     // helper()
    PropertyAccess, // obj.method(), a.b.c(), this.run()
}

impl CalleeShape {
    pub fn classify(callee: &TSNode) -> Option<Self> {
        match callee.kind() {
            "identifier" => Some(CalleeShape::Identifier),
            "member_expression" => Some(CalleeShape::PropertyAccess),
            _ => None,
        }
    }
}

/// Collects the names called inside a declaration.
///
/// Names are the literal source text of the callee, so `this.helper()` yields
/// `"this.helper"` and never a class-qualified name.
#[derive(Debug, Clone, Default)]
pub struct CallExtractor;

impl CallExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Distinct callee names found anywhere below `node`, nested closures included.
    pub fn extract(&self, node: &TSNode, source: &[u8]) -> BTreeSet<String> {
        let mut calls = BTreeSet::new();
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.traverse(&child, source, &mut calls);
        }
        calls
    }

    fn traverse(&self, node: &TSNode, source: &[u8], calls: &mut BTreeSet<String>) {
        if node.kind() == "call_expression" {
            if let Some(name) = Self::callee_name(node, source) {
                calls.insert(name);
            }
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.traverse(&child, source, calls);
        }
    }

    /// Name of the function invoked by a `call_expression`, if it has one.
    pub fn callee_name(call: &TSNode, source: &[u8]) -> Option<String> {
        // tree-sitter parses tagged templates as calls with a template argument
        if let Some(arguments) = call.child_by_field_name("arguments") {
            if arguments.kind() == "template_string" {
                return None;
            }
        }

        let callee = call.child_by_field_name("function")?;
        CalleeShape::classify(&callee)?;

        let name = extract_text(&callee, source);
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}
