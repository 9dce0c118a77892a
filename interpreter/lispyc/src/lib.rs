//! Lispy driver - the session pipeline and its two front ends.
//!
//! The library half wires the crates together: one source line goes
//! through `lispy_lexer` -> `lispy_parse` -> `lispy_eval` and comes
//! back as a final [`Value`](lispy_ir::Value). The binary half (`lispy`)
//! offers an interactive prompt and a line-by-line script runner on top
//! of that pipeline.

pub mod repl;
mod run;
mod session;

pub use run::run_file;
pub use session::{eval_line, LineError};
