//! Lispy CLI.

use lispyc::{repl, run_file};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{HELP_MSG}");
        return;
    }

    match args.first() {
        Some(path) => {
            if let Err(e) = run_file(path) {
                eprintln!("error: failed to run {path}: {e}");
                std::process::exit(1);
            }
        }
        None => {
            if let Err(e) = repl::run() {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
    }
}

/// `LISPY_LOG=trace` turns the parser/evaluator instrumentation on;
/// the default stays quiet.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("LISPY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

const HELP_MSG: &str = r"Usage: lispy [FILE]

  FILE  Lispy source file to evaluate line by line;
        with no file, starts the interactive prompt

Options:
  -h, --help  Print this message";
