//! Jlisp Parse - turns a line of source text into a syntax tree.
//!
//! The evaluator never sees text; it consumes the [`AstNode`] tree built here.
//!
//! # Example
//!
//! ```
//! use jlisp_parse::{parse, Tag};
//!
//! let root = parse("<stdin>", "(+ 1 2)").unwrap();
//! assert_eq!(root.tag, Tag::Root);
//! assert_eq!(root.exprs().count(), 1);
//! ```

mod ast;
mod error;
pub mod lexer;
mod parser;
mod span;

pub use ast::{AstNode, Tag};
pub use error::{ParseError, ParseErrorKind};
pub use parser::parse;
pub use span::Span;
