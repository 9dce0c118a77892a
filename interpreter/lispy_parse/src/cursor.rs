//! Token navigation for the parser.

use tracing::trace;

use lispy_ir::{Token, TokenList};

/// Read-only cursor over a token list, with access back into the source
/// text for leaf contents.
pub struct Cursor<'a> {
    source: &'a str,
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str, tokens: &'a TokenList) -> Self {
        Cursor {
            source,
            tokens,
            pos: 0,
        }
    }

    /// The current token, or `None` at end of input.
    #[inline]
    pub fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    /// Advance past the current token.
    pub fn bump(&mut self) {
        if let Some(token) = self.tokens.get(self.pos) {
            trace!(?token, "bump");
        }
        self.pos += 1;
    }

    /// The source text a token covers.
    #[inline]
    pub fn text(&self, token: Token) -> &'a str {
        &self.source[token.span.start as usize..token.span.end as usize]
    }
}
