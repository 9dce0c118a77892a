//! Non-interactive script runner.

use std::fs;
use std::io;

use crate::session;

/// Evaluate a script file line by line, printing each result.
///
/// Same contract as the prompt: values (error values included) go to
/// stdout, syntax errors to stderr, and a bad line never stops the
/// run. Only failing to read the file itself is fatal.
pub fn run_file(path: &str) -> io::Result<()> {
    let source = fs::read_to_string(path)?;
    for line in source.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match session::eval_line(line) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("error: {e}"),
        }
    }
    Ok(())
}
