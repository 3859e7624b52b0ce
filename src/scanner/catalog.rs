//! Function catalog: which definitions in a module deserve a test stub.
//!
//! A `function_definition` is classified by its nearest enclosing definition:
//! a class makes it a method, another function makes it a nested helper
//! (not testable), and reaching the module root makes it a free function.

use tree_sitter::{Node, Tree};
use tracing::trace;

use super::model::{FunctionDescriptor, Scope};
use crate::utils::is_dunder;

const FUNCTION_DEFINITION: &str = "function_definition";
const CLASS_DEFINITION: &str = "class_definition";

/// Docstring attached to every descriptor until source docstrings are read.
pub const PLACEHOLDER_DOCSTRING: &str = "function docstring";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Enclosing {
    Module,
    Class(String),
    Function,
}

/// Descriptors for every testable function, in source order.
///
/// Pre-order walk driven by a single cursor, so nesting depth costs no stack.
pub fn extract_functions(tree: &Tree, source: &[u8]) -> Vec<FunctionDescriptor> {
    let mut functions = Vec::new();
    let mut cursor = tree.walk();

    loop {
        let node = cursor.node();
        if node.kind() == FUNCTION_DEFINITION {
            if let Some(descriptor) = describe(node, source) {
                functions.push(descriptor);
            }
        }

        if cursor.goto_first_child() {
            continue;
        }
        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                return functions;
            }
        }
    }
}

fn describe(node: Node<'_>, source: &[u8]) -> Option<FunctionDescriptor> {
    let name = definition_name(node, source)?;
    if is_dunder(&name) {
        trace!(name = %name, "skipping dunder function");
        return None;
    }

    let scope = match enclosing(node, source) {
        Enclosing::Module => Scope::Module,
        Enclosing::Class(class) => Scope::Class(class),
        Enclosing::Function => {
            trace!(name = %name, "skipping nested function");
            return None;
        }
    };

    trace!(%scope, name = %name, "cataloged function");
    Some(FunctionDescriptor::new(scope, name, PLACEHOLDER_DOCSTRING))
}

fn enclosing(node: Node<'_>, source: &[u8]) -> Enclosing {
    let mut current = node.parent();
    while let Some(ancestor) = current {
        match ancestor.kind() {
            CLASS_DEFINITION => {
                return definition_name(ancestor, source)
                    .map(Enclosing::Class)
                    .unwrap_or(Enclosing::Function);
            }
            FUNCTION_DEFINITION => return Enclosing::Function,
            _ => current = ancestor.parent(),
        }
    }
    Enclosing::Module
}

fn definition_name(node: Node<'_>, source: &[u8]) -> Option<String> {
    node.child_by_field_name("name")
        .and_then(|name| name.utf8_text(source).ok())
        .map(str::to_string)
}
