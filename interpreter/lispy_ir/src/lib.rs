//! Lispy IR - shared representation types for the Lispy interpreter.
//!
//! This crate holds every type that crosses a crate boundary:
//!
//! - [`Span`]: compact byte range into the source line
//! - [`Token`], [`TokenKind`], [`TokenList`]: lexer output
//! - [`SyntaxNode`], [`SyntaxKind`]: the parse tree the reader consumes
//! - [`Value`]: the runtime value model, including its canonical printer
//!   (the `Display` impl)
//!
//! Downstream crates depend on this one and never on each other's
//! internals: `lispy_lexer` produces `TokenList`, `lispy_parse` turns it
//! into a `SyntaxNode` tree, and `lispy_eval` reduces that tree to a
//! final `Value`.

mod span;
mod syntax;
mod token;
mod value;

pub use span::Span;
pub use syntax::{SyntaxKind, SyntaxNode};
pub use token::{Token, TokenKind, TokenList};
pub use value::Value;
