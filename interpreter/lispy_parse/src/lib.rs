//! Recursive descent parser for Lispy.
//!
//! Grammar, unchanged from the language's first arithmetic stage:
//!
//! ```text
//! program : expr* EOF          -> SyntaxKind::Root
//! expr    : NUMBER | SYMBOL | sexpr
//! sexpr   : '(' expr* ')'      -> SyntaxKind::Sexpr
//! ```
//!
//! The parser produces the closed-enum [`SyntaxNode`] tree the reader
//! consumes. Punctuation tokens are consumed structurally and never
//! become nodes, so downstream code never filters them out.

mod cursor;
mod error;

pub use cursor::Cursor;
pub use error::ParseError;

use tracing::debug;

use lispy_ir::{Span, SyntaxKind, SyntaxNode, Token, TokenKind, TokenList};

/// Parse one line of source into a [`SyntaxKind::Root`] node.
///
/// `source` must be the same text `tokens` was lexed from: leaf nodes
/// slice their literal text out of it via token spans.
pub fn parse(source: &str, tokens: &TokenList) -> Result<SyntaxNode, ParseError> {
    debug!(tokens = tokens.len(), "parsing line");
    Parser::new(source, tokens).program()
}

/// Parser state.
struct Parser<'a> {
    cursor: Cursor<'a>,
    source_len: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str, tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(source, tokens),
            source_len: source.len(),
        }
    }

    /// `program : expr* EOF`
    fn program(mut self) -> Result<SyntaxNode, ParseError> {
        let mut children = Vec::new();
        while let Some(token) = self.cursor.peek() {
            children.push(self.expr(token)?);
        }
        let span = Span::from_range(0..self.source_len);
        Ok(SyntaxNode::compound(SyntaxKind::Root, children, span))
    }

    /// `expr : NUMBER | SYMBOL | sexpr`
    ///
    /// `token` is the already-peeked current token.
    fn expr(&mut self, token: Token) -> Result<SyntaxNode, ParseError> {
        match token.kind {
            TokenKind::Number => Ok(self.leaf(SyntaxKind::Number, token)),
            TokenKind::Symbol => Ok(self.leaf(SyntaxKind::Symbol, token)),
            TokenKind::LParen => self.sexpr(token),
            found @ (TokenKind::RParen | TokenKind::LBrace | TokenKind::RBrace) => {
                Err(ParseError::UnexpectedToken {
                    found,
                    span: token.span,
                })
            }
        }
    }

    fn leaf(&mut self, kind: SyntaxKind, token: Token) -> SyntaxNode {
        let text = self.cursor.text(token);
        self.cursor.bump();
        SyntaxNode::leaf(kind, text, token.span)
    }

    /// `sexpr : '(' expr* ')'`
    ///
    /// `open` is the `(` token; its span is reported if the close paren
    /// never arrives.
    fn sexpr(&mut self, open: Token) -> Result<SyntaxNode, ParseError> {
        self.cursor.bump();
        let mut children = Vec::new();
        loop {
            match self.cursor.peek() {
                None => return Err(ParseError::UnclosedParen { span: open.span }),
                Some(token) if token.kind == TokenKind::RParen => {
                    self.cursor.bump();
                    let span = open.span.cover(token.span);
                    return Ok(SyntaxNode::compound(SyntaxKind::Sexpr, children, span));
                }
                Some(token) => children.push(self.expr(token)?),
            }
        }
    }
}
