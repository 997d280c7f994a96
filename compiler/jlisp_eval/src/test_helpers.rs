//! Shared helpers for unit tests.

use jlisp_parse::parse;

use crate::{Interpreter, Value};

/// Parse and evaluate one line against `interp`'s root environment.
pub fn eval_in(interp: &Interpreter, source: &str) -> Value {
    let node = parse("<test>", source).unwrap_or_else(|e| panic!("parse failed: {e}"));
    interp.eval_node(&node)
}

/// Evaluate one line in a fresh interpreter and render the result.
pub fn render(source: &str) -> String {
    eval_in(&Interpreter::new(), source).to_string()
}

/// Evaluate several lines in one interpreter, rendering the last result.
pub fn render_session(lines: &[&str]) -> String {
    let interp = Interpreter::new();
    let mut last = Value::unit();
    for line in lines {
        last = eval_in(&interp, line);
    }
    last.to_string()
}
