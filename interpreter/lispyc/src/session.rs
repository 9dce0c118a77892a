//! The line pipeline: lex, parse, read, eval.

use thiserror::Error;
use tracing::debug;

use lispy_eval::{eval, read};
use lispy_ir::Value;
use lispy_lexer::LexError;
use lispy_parse::ParseError;

/// A host-side failure for one line: the text never became a value.
///
/// Language-level failures (division by zero, bad operands, ...) are
/// NOT here — those come back as `Ok` carrying a
/// [`Value::Error`](lispy_ir::Value::Error) and print like any result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Evaluate one line of source to its final value.
pub fn eval_line(source: &str) -> Result<Value, LineError> {
    debug!(source, "evaluating line");
    let tokens = lispy_lexer::lex(source)?;
    let tree = lispy_parse::parse(source, &tokens)?;
    Ok(eval(read(tree)))
}
