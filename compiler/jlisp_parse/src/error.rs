//! Parse errors.

use thiserror::Error;

use crate::Span;

/// What went wrong while parsing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    #[error("expected '{expected}' but found end of input")]
    Unclosed { expected: char },
    #[error("unexpected '{found}' with no matching opening bracket")]
    UnexpectedClose { found: char },
    #[error("expected '{expected}' but found '{found}'")]
    MismatchedClose { expected: char, found: char },
}

/// A parse failure, located in the input.
///
/// Displays as `<origin>:<line>:<column>: error: <message>`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{origin}:{line}:{column}: error: {kind}")]
pub struct ParseError {
    /// Name of the input (`<stdin>`, a file path).
    pub origin: String,
    pub line: u32,
    pub column: u32,
    pub span: Span,
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// Build an error, resolving `span` to a line and column in `source`.
    pub fn at(origin: &str, source: &str, span: Span, kind: ParseErrorKind) -> Self {
        let (line, column) = span.line_col(source);
        ParseError {
            origin: origin.to_string(),
            line,
            column,
            span,
            kind,
        }
    }
}
