//! One parse-then-evaluate step per input line.

use std::fmt;

use jlisp_eval::Interpreter;
use jlisp_parse::parse;

/// Origin name used in parse error locations.
const DEFAULT_ORIGIN: &str = "<stdin>";

/// What a single line produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line parsed; this is the rendered result of evaluating it.
    Value(String),
    /// The line did not parse; the evaluator was not run.
    ParseError(String),
}

impl LineOutcome {
    pub fn text(&self) -> &str {
        match self {
            LineOutcome::Value(text) | LineOutcome::ParseError(text) => text,
        }
    }

    #[inline]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, LineOutcome::ParseError(_))
    }
}

impl fmt::Display for LineOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// A root environment shared by every line evaluated through it.
pub struct Session {
    interp: Interpreter,
    origin: String,
}

impl Session {
    /// A session reading from `<stdin>`.
    pub fn new() -> Self {
        Self::with_origin(DEFAULT_ORIGIN)
    }

    /// A session whose parse errors name `origin`, e.g. a script path.
    pub fn with_origin(origin: impl Into<String>) -> Self {
        Session {
            interp: Interpreter::new(),
            origin: origin.into(),
        }
    }

    #[inline]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Parse `line` and evaluate it against the session's root environment.
    pub fn eval_line(&self, line: &str) -> LineOutcome {
        match parse(&self.origin, line) {
            Ok(tree) => LineOutcome::Value(self.interp.eval_node(&tree).to_string()),
            Err(err) => {
                tracing::debug!(%err, "line rejected by parser");
                LineOutcome::ParseError(err.to_string())
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
