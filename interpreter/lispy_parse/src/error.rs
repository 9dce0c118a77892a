//! Parse errors.

use thiserror::Error;

use lispy_ir::{Span, TokenKind};

/// Syntax error for one source line. The first error aborts the parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token that cannot start an expression: stray `)`, or the brace
    /// punctuation this stage's grammar has no use for.
    #[error("expected an expression, found {found} at {span}")]
    UnexpectedToken { found: TokenKind, span: Span },

    /// Input ended inside a parenthesized expression.
    #[error("unclosed `(` opened at {span}")]
    UnclosedParen { span: Span },
}
