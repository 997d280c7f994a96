//! Syntax tree handed to the reader.
//!
//! The tree is untyped: every node carries a [`Tag`], its raw
//! source text and an ordered list of children. Composite nodes keep their
//! bracket tokens as [`Tag::Punct`] children, and the root keeps the start and
//! end match artifacts as [`Tag::Anchor`] children. Consumers skip both.

use std::fmt;

use jlisp_stack::ensure_sufficient_stack;

use crate::Span;

/// Kind of syntax node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Whole input line.
    Root,
    /// Integer literal.
    Number,
    /// Identifier or operator name.
    Symbol,
    /// `( ... )`
    SExpr,
    /// `{ ... }`
    QExpr,
    /// A bracket token inside a composite node.
    Punct,
    /// Start/end-of-input marker on the root node.
    Anchor,
}

impl Tag {
    /// Tag name used when printing the tree.
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Root => ">",
            Tag::Number => "number",
            Tag::Symbol => "symbol",
            Tag::SExpr => "sexpr",
            Tag::QExpr => "qexpr",
            Tag::Punct => "char",
            Tag::Anchor => "regex",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of the syntax tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AstNode {
    pub tag: Tag,
    /// Source text for leaves and punctuation; empty for composites.
    pub contents: String,
    pub span: Span,
    pub children: Vec<AstNode>,
}

impl AstNode {
    /// Create a leaf node.
    pub fn leaf(tag: Tag, contents: impl Into<String>, span: Span) -> Self {
        AstNode {
            tag,
            contents: contents.into(),
            span,
            children: Vec::new(),
        }
    }

    /// Create a composite node.
    pub fn composite(tag: Tag, span: Span, children: Vec<AstNode>) -> Self {
        AstNode {
            tag,
            contents: String::new(),
            span,
            children,
        }
    }

    /// Punctuation and anchors carry no meaning for the reader.
    #[inline]
    pub fn is_syntax(&self) -> bool {
        matches!(self.tag, Tag::Punct | Tag::Anchor)
    }

    /// Children that carry meaning, in source order.
    pub fn exprs(&self) -> impl Iterator<Item = &AstNode> {
        self.children.iter().filter(|child| !child.is_syntax())
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        ensure_sufficient_stack(|| {
            write!(f, "{:indent$}{}", "", self.tag, indent = depth * 2)?;
            if self.children.is_empty() {
                writeln!(f, ": '{}'", self.contents)
            } else {
                writeln!(f)?;
                for child in &self.children {
                    child.write_tree(f, depth + 1)?;
                }
                Ok(())
            }
        })
    }
}

/// Tears the tree down with an explicit work list instead of recursing once
/// per nesting level.
impl Drop for AstNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Indented tree dump, one node per line.
impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}
