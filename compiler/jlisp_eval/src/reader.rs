//! Syntax tree to value translation.
//!
//! Pure structure: nothing is evaluated here.

use jlisp_parse::{AstNode, Tag};
use jlisp_stack::ensure_sufficient_stack;

use crate::{Cells, EvalError, Value};

/// Convert a syntax node into a value tree.
///
/// The root node and S-expression nodes become [`Value::SExpr`], Q-expression
/// nodes become [`Value::QExpr`]. Bracket and anchor children are skipped.
pub fn read(node: &AstNode) -> Value {
    ensure_sufficient_stack(|| match node.tag {
        Tag::Number => read_number(&node.contents),
        Tag::Symbol => Value::Symbol(node.contents.clone()),
        Tag::Root | Tag::SExpr => Value::SExpr(read_children(node)),
        Tag::QExpr => Value::QExpr(read_children(node)),
        Tag::Punct | Tag::Anchor => {
            tracing::warn!(tag = %node.tag, contents = %node.contents, "syntax node handed to reader");
            EvalError::MalformedNode {
                contents: node.contents.clone(),
            }
            .into()
        }
    })
}

fn read_number(text: &str) -> Value {
    text.parse::<i64>()
        .map_or_else(|_| EvalError::InvalidNumber.into(), Value::Number)
}

fn read_children(node: &AstNode) -> Cells {
    node.exprs().map(read).collect()
}
