//! The tree importer: parse tree in, value model out.

use lispy_ir::{SyntaxKind, SyntaxNode, Value};

use crate::errors;

/// Import a parse tree into the value model.
///
/// Consumes the node: leaf text moves into the value, children move
/// into their parent S-expression in order. Import cannot fail — a
/// number literal outside the representable range becomes an error
/// VALUE, which evaluation then propagates like any computed error.
pub fn read(node: SyntaxNode) -> Value {
    match node.kind {
        SyntaxKind::Number => read_number(&node.text),
        SyntaxKind::Symbol => Value::symbol(node.text),
        SyntaxKind::Root | SyntaxKind::Sexpr => {
            let mut form = Value::empty_sexpr();
            for child in node.children {
                form.push(read(child));
            }
            form
        }
    }
}

/// Parse a number literal.
///
/// `f64` parsing never reports range errors — an overflowing literal
/// parses to infinity — so non-finite stands in for the out-of-range
/// check. The grammar already guarantees the text is digit-shaped.
fn read_number(text: &str) -> Value {
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() => Value::number(n),
        _ => errors::invalid_number(),
    }
}
