//! The parse tree handed from the parser to the reader.
//!
//! Node kinds form a small closed enumeration instead of the stringly
//! tags a generic parser combinator would produce, so the reader
//! discriminates with a `match` rather than substring tests. Structural
//! punctuation and whitespace never appear as nodes: the parser drops
//! them while building compounds.

use crate::Span;

/// What a parse-tree node represents.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SyntaxKind {
    /// The whole line: zero or more expressions.
    Root,
    /// A number literal leaf.
    Number,
    /// An operator symbol leaf.
    Symbol,
    /// A parenthesized compound: `( expr* )`.
    Sexpr,
}

/// A node in the parse tree.
///
/// Leaves (`Number`, `Symbol`) carry their literal text and no children;
/// compounds (`Root`, `Sexpr`) carry children and no text.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntaxNode {
    pub kind: SyntaxKind,
    pub span: Span,
    /// Literal contents for leaves, empty for compounds.
    pub text: String,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Construct a leaf node carrying its literal text.
    pub fn leaf(kind: SyntaxKind, text: impl Into<String>, span: Span) -> Self {
        SyntaxNode {
            kind,
            span,
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Construct a compound node from its ordered children.
    pub fn compound(kind: SyntaxKind, children: Vec<SyntaxNode>, span: Span) -> Self {
        SyntaxNode {
            kind,
            span,
            text: String::new(),
            children,
        }
    }
}
