//! Declaration scanning shared by the TypeScript and JavaScript grammars.
//!
//! Only top-level statements are considered (after unwrapping `export`).
//! Three shapes are recognized, in this order per file:
//!
//! - `function name() {}` declarations
//! - variables initialized with an arrow function or function expression
//! - methods of named classes, keyed as `Class.method`

use std::path::Path;
use tree_sitter::Node as TSNode;

use super::common::{extract_text, find_children_by_kind, has_keyword_child, named_children};
use super::{Declaration, DeclarationKind};
use crate::core::CallExtractor;

const FUNCTION_DECLARATIONS: &[&str] = &["function_declaration", "generator_function_declaration"];
const VARIABLE_DECLARATIONS: &[&str] = &["lexical_declaration", "variable_declaration"];
const FUNCTION_INITIALIZERS: &[&str] = &[
    "arrow_function",
    "function",
    "function_expression",
    "generator_function",
];
const CLASS_DECLARATIONS: &[&str] = &["class_declaration", "abstract_class_declaration"];
const METHOD_MEMBERS: &[&str] = &["method_definition", "abstract_method_signature"];

pub struct DeclarationScanner<'a> {
    source: &'a [u8],
    file_path: &'a Path,
    line_offset: usize,
    call_extractor: CallExtractor,
}

impl<'a> DeclarationScanner<'a> {
    pub fn new(source: &'a [u8], file_path: &'a Path) -> Self {
        Self {
            source,
            file_path,
            line_offset: 0,
            call_extractor: CallExtractor::new(),
        }
    }

    /// Shift reported line numbers, for sources embedded in a larger file.
    pub fn with_line_offset(mut self, line_offset: usize) -> Self {
        self.line_offset = line_offset;
        self
    }

    pub fn scan(&self, root: &TSNode) -> Vec<Declaration> {
        let statements = self.top_level_statements(root);
        let mut declarations = Vec::new();

        self.extract_functions(&statements, &mut declarations);
        self.extract_variables(&statements, &mut declarations);
        self.extract_classes(&statements, &mut declarations);

        declarations
    }

    fn top_level_statements<'tree>(&self, root: &TSNode<'tree>) -> Vec<TSNode<'tree>> {
        let mut statements = Vec::new();

        for child in named_children(root) {
            if child.kind() == "export_statement" {
                if let Some(declaration) = child.child_by_field_name("declaration") {
                    statements.push(declaration);
                } else if let Some(value) = child.child_by_field_name("value") {
                    // `export default class { ... }`
                    statements.push(value);
                }
            } else {
                statements.push(child);
            }
        }

        statements
    }

    fn extract_functions(&self, statements: &[TSNode], declarations: &mut Vec<Declaration>) {
        for statement in statements {
            if !FUNCTION_DECLARATIONS.contains(&statement.kind()) {
                continue;
            }
            // Anonymous functions are not registered
            let Some(name_node) = statement.child_by_field_name("name") else {
                continue;
            };

            let name = extract_text(&name_node, self.source).to_string();
            declarations.push(self.declaration(name, DeclarationKind::Function, statement));
        }
    }

    fn extract_variables(&self, statements: &[TSNode], declarations: &mut Vec<Declaration>) {
        for statement in statements {
            if !VARIABLE_DECLARATIONS.contains(&statement.kind()) {
                continue;
            }

            for declarator in find_children_by_kind(statement, "variable_declarator") {
                let (Some(name_node), Some(initializer)) = (
                    declarator.child_by_field_name("name"),
                    declarator.child_by_field_name("value"),
                ) else {
                    continue;
                };

                // Only a bare arrow/function initializer counts; wrapped ones
                // such as `(() => {}) as Handler` do not.
                if !FUNCTION_INITIALIZERS.contains(&initializer.kind()) {
                    continue;
                }

                let name = extract_text(&name_node, self.source).to_string();
                let mut declaration =
                    self.declaration(name, DeclarationKind::Variable, &initializer);
                declaration.line_number = self.line_of(&declarator);
                declarations.push(declaration);
            }
        }
    }

    fn extract_classes(&self, statements: &[TSNode], declarations: &mut Vec<Declaration>) {
        for statement in statements {
            // `class` is the expression form left behind by `export default class`
            let kind = statement.kind();
            if !CLASS_DECLARATIONS.contains(&kind) && kind != "class" {
                continue;
            }

            match statement.child_by_field_name("name") {
                Some(name_node) => {
                    let class_name = extract_text(&name_node, self.source);
                    self.extract_class_methods(statement, class_name, declarations);
                }
                None => self.skip_anonymous_class(statement),
            }
        }
    }

    fn skip_anonymous_class(&self, class_node: &TSNode) {
        tracing::debug!(
            file = %self.file_path.display(),
            line = self.line_of(class_node),
            "Skipping methods of anonymous class"
        );
    }

    fn extract_class_methods(
        &self,
        class_node: &TSNode,
        class_name: &str,
        declarations: &mut Vec<Declaration>,
    ) {
        let Some(class_body) = class_node.child_by_field_name("body") else {
            return;
        };

        // The TypeScript grammar puts member decorators beside the member
        // instead of inside it
        let mut decorators = Vec::new();

        for member in named_children(&class_body) {
            if member.kind() == "decorator" {
                decorators.push(member);
                continue;
            }
            let member_decorators = std::mem::take(&mut decorators);

            if !METHOD_MEMBERS.contains(&member.kind()) {
                continue;
            }
            // Accessors are properties, not methods
            if has_keyword_child(&member, "get") || has_keyword_child(&member, "set") {
                continue;
            }
            let Some(name_node) = member.child_by_field_name("name") else {
                continue;
            };

            let method_name = extract_text(&name_node, self.source);
            if method_name == "constructor" {
                continue;
            }

            let name = format!("{}.{}", class_name, method_name);
            let mut declaration = self.declaration(name, DeclarationKind::Method, &member);
            for decorator in &member_decorators {
                declaration
                    .calls
                    .extend(self.call_extractor.extract(decorator, self.source));
            }
            declarations.push(declaration);
        }
    }

    fn declaration(&self, name: String, kind: DeclarationKind, body: &TSNode) -> Declaration {
        Declaration {
            name,
            kind,
            file_path: self.file_path.to_path_buf(),
            line_number: self.line_of(body),
            calls: self.call_extractor.extract(body, self.source),
        }
    }

    fn line_of(&self, node: &TSNode) -> usize {
        node.start_position().row + 1 + self.line_offset
    }
}
