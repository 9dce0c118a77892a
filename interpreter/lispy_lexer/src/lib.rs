//! Lexer for Lispy using logos.
//!
//! The lexical grammar is deliberately tiny: number literals
//! (`-?[0-9]+\.?[0-9]*`), the four single-character operator symbols,
//! and bracket punctuation. Whitespace separates tokens and is skipped.
//!
//! Maximal munch resolves the `-` ambiguity the way the grammar intends:
//! `-5` lexes as one number token, `- 5` as a symbol followed by a
//! number.

use logos::Logos;
use thiserror::Error;

use lispy_ir::{Span, Token, TokenKind, TokenList};

/// Raw token from logos, mapped 1:1 onto [`TokenKind`].
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")] // Whitespace separates tokens
enum RawToken {
    #[regex(r"-?[0-9]+\.?[0-9]*")]
    Number,

    #[regex(r"[+\-*/]")]
    Symbol,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
}

impl RawToken {
    fn kind(self) -> TokenKind {
        match self {
            RawToken::Number => TokenKind::Number,
            RawToken::Symbol => TokenKind::Symbol,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
        }
    }
}

/// Error produced when the source contains a character outside the
/// lexical grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected character `{ch}` at {span}")]
    UnexpectedCharacter { ch: char, span: Span },
}

/// Tokenize one line of source.
///
/// Stops at the first character outside the grammar; everything before
/// it has already been validated, so a caller retrying after an edit
/// re-lexes the whole (short) line.
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    let mut tokens = TokenList::new();

    for (result, range) in RawToken::lexer(source).spanned() {
        let span = Span::from_range(range.clone());
        match result {
            Ok(raw) => tokens.push(Token::new(raw.kind(), span)),
            Err(()) => {
                let ch = source[range].chars().next().unwrap_or('\u{FFFD}');
                return Err(LexError::UnexpectedCharacter { ch, span });
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(source: &str) -> Vec<TokenKind> {
        match lex(source) {
            Ok(tokens) => tokens.iter().map(|t| t.kind).collect(),
            Err(e) => panic!("lexing {source:?} failed: {e}"),
        }
    }

    #[test]
    fn empty_line_lexes_to_nothing() {
        assert_eq!(kinds(""), vec![]);
        assert_eq!(kinds("   \t  "), vec![]);
    }

    #[test]
    fn number_literals() {
        assert_eq!(kinds("42"), vec![TokenKind::Number]);
        assert_eq!(kinds("3.14"), vec![TokenKind::Number]);
        assert_eq!(kinds("-7"), vec![TokenKind::Number]);
        assert_eq!(kinds("10."), vec![TokenKind::Number]);
    }

    #[test]
    fn negative_number_versus_minus_symbol() {
        // Maximal munch: no space means one number token.
        assert_eq!(kinds("-5"), vec![TokenKind::Number]);
        assert_eq!(kinds("- 5"), vec![TokenKind::Symbol, TokenKind::Number]);
    }

    #[test]
    fn all_four_operator_symbols() {
        assert_eq!(
            kinds("+ - * /"),
            vec![
                TokenKind::Symbol,
                TokenKind::Symbol,
                TokenKind::Symbol,
                TokenKind::Symbol
            ]
        );
    }

    #[test]
    fn parens_and_braces_are_punctuation_tokens() {
        assert_eq!(
            kinds("(){}"),
            vec![
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::RBrace
            ]
        );
    }

    #[test]
    fn spans_index_back_into_the_source() {
        let source = "(+ 1 20)";
        let tokens = match lex(source) {
            Ok(tokens) => tokens,
            Err(e) => panic!("lexing failed: {e}"),
        };
        let texts: Vec<&str> = tokens
            .iter()
            .map(|t| &source[t.span.start as usize..t.span.end as usize])
            .collect();
        assert_eq!(texts, vec!["(", "+", "1", "20", ")"]);
    }

    #[test]
    fn unexpected_character_is_reported_with_its_span() {
        let err = match lex("(+ 1 x)") {
            Err(err) => err,
            Ok(tokens) => panic!("expected a lex error, got {tokens:?}"),
        };
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                ch: 'x',
                span: Span::new(5, 6)
            }
        );
    }
}
