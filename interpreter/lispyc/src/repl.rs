//! Interactive read-eval-print loop.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::session;

const PROMPT: &str = "lispy> ";

/// Run the prompt until end of input or interrupt.
///
/// Every line prints something: the evaluated value (error values
/// included, as plain text) on stdout, or the syntax error on stderr.
/// No input terminates the loop except Ctrl+c / Ctrl+d.
pub fn run() -> rustyline::Result<()> {
    println!("Lispy Version {}", env!("CARGO_PKG_VERSION"));
    println!("Press Ctrl+c to Exit\n");

    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(&line);
                match session::eval_line(&line) {
                    Ok(value) => println!("{value}"),
                    Err(e) => eprintln!("error: {e}"),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
