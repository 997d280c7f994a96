//! Non-interactive commands: `run`, `parse` and `lex`.
//!
//! Each command reads a whole file but treats it the way the REPL treats
//! typed input, one line at a time.

use std::io::{self, Write};

use jlisp_parse::{lexer, parse};

use crate::Session;

/// Evaluate a script file, printing the result of every non-blank line.
pub fn run_file(path: &str) {
    let source = read_file(path);
    let session = Session::with_origin(path);
    let stdout = io::stdout();
    if let Err(err) = run_source(&session, &source, &mut stdout.lock()) {
        eprintln!("error writing output: {err}");
        std::process::exit(1);
    }
}

/// Feed `source` to `session` line by line, writing each outcome to `out`.
///
/// Blank lines are skipped. A line that fails to parse is reported and the
/// remaining lines still run.
pub fn run_source<W: Write>(session: &Session, source: &str, out: &mut W) -> io::Result<()> {
    for line in source.lines().filter(|line| !line.trim().is_empty()) {
        writeln!(out, "{}", session.eval_line(line))?;
    }
    Ok(())
}

/// Print the syntax tree of every non-blank line.
pub fn parse_file(path: &str) {
    let source = read_file(path);
    let mut failed = false;
    for line in source.lines().filter(|line| !line.trim().is_empty()) {
        match parse(path, line) {
            Ok(tree) => print!("{tree}"),
            Err(err) => {
                eprintln!("{err}");
                failed = true;
            }
        }
    }
    if failed {
        std::process::exit(1);
    }
}

/// Print the tokens of every non-blank line.
pub fn lex_file(path: &str) {
    let source = read_file(path);
    let mut failed = false;
    for line in source.lines().filter(|line| !line.trim().is_empty()) {
        match lexer::lex(path, line) {
            Ok(tokens) => {
                for token in tokens {
                    println!("{:?} {:?} {:?}", token.span, token.kind, token.text);
                }
            }
            Err(err) => {
                eprintln!("{err}");
                failed = true;
            }
        }
    }
    if failed {
        std::process::exit(1);
    }
}

/// Read a source file, exiting with a readable message on failure.
fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
                io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
