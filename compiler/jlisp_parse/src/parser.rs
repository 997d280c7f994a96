//! Recursive-descent parser.
//!
//! ```text
//! number : /-?[0-9]+/ ;
//! symbol : /[a-zA-Z0-9_+\-*^\/\\=<>!&%]+/ ;
//! sexpr  : '(' <expr>* ')' ;
//! qexpr  : '{' <expr>* '}' ;
//! expr   : <number> | <symbol> | <sexpr> | <qexpr> ;
//! lispy  : /^/ <expr>* /$/ ;
//! ```

use jlisp_stack::ensure_sufficient_stack;

use crate::lexer::{lex, Token, TokenKind};
use crate::{AstNode, ParseError, ParseErrorKind, Span, Tag};

/// Parse one unit of input into a [`Tag::Root`] node.
///
/// `origin` names the input in error messages.
pub fn parse(origin: &str, source: &str) -> Result<AstNode, ParseError> {
    let tokens = lex(origin, source)?;
    let mut parser = Parser {
        origin,
        source,
        tokens,
        pos: 0,
    };
    parser.parse_root()
}

struct Parser<'a> {
    origin: &'a str,
    source: &'a str,
    tokens: Vec<Token<'a>>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn error(&self, span: Span, kind: ParseErrorKind) -> ParseError {
        ParseError::at(self.origin, self.source, span, kind)
    }

    fn bump(&mut self) -> Option<Token<'a>> {
        let token = self.tokens.get(self.pos).cloned()?;
        self.pos += 1;
        Some(token)
    }

    fn end_of_input(&self) -> Span {
        Span::point(self.source.len())
    }

    fn parse_root(&mut self) -> Result<AstNode, ParseError> {
        let mut children = vec![AstNode::leaf(Tag::Anchor, "", Span::point(0))];
        while let Some(token) = self.bump() {
            if token.kind.is_close() {
                let found = token.kind.bracket().unwrap_or(')');
                return Err(self.error(token.span, ParseErrorKind::UnexpectedClose { found }));
            }
            children.push(self.parse_expr(token)?);
        }
        children.push(AstNode::leaf(Tag::Anchor, "", self.end_of_input()));
        Ok(AstNode::composite(
            Tag::Root,
            Span::from_range(0..self.source.len()),
            children,
        ))
    }

    /// Parse the expression starting at `token`, which must not be a closer.
    ///
    /// Recurses once per nesting level, growing the stack as needed.
    fn parse_expr(&mut self, token: Token<'a>) -> Result<AstNode, ParseError> {
        ensure_sufficient_stack(|| self.parse_expr_inner(token))
    }

    fn parse_expr_inner(&mut self, token: Token<'a>) -> Result<AstNode, ParseError> {
        match token.kind {
            TokenKind::Number => Ok(AstNode::leaf(Tag::Number, token.text, token.span)),
            TokenKind::Symbol => Ok(AstNode::leaf(Tag::Symbol, token.text, token.span)),
            TokenKind::LParen => self.parse_list(Tag::SExpr, token),
            TokenKind::LBrace => self.parse_list(Tag::QExpr, token),
            TokenKind::RParen | TokenKind::RBrace => {
                let found = token.kind.bracket().unwrap_or(')');
                Err(self.error(token.span, ParseErrorKind::UnexpectedClose { found }))
            }
        }
    }

    fn parse_list(&mut self, tag: Tag, open: Token<'a>) -> Result<AstNode, ParseError> {
        let expected = open.kind.closer().unwrap_or(')');
        let mut children = vec![AstNode::leaf(Tag::Punct, open.text, open.span)];
        loop {
            let Some(token) = self.bump() else {
                return Err(self.error(self.end_of_input(), ParseErrorKind::Unclosed { expected }));
            };
            if token.kind.is_close() {
                let found = token.kind.bracket().unwrap_or(')');
                if found != expected {
                    return Err(
                        self.error(token.span, ParseErrorKind::MismatchedClose { expected, found })
                    );
                }
                let span = open.span.merge(token.span);
                children.push(AstNode::leaf(Tag::Punct, token.text, token.span));
                return Ok(AstNode::composite(tag, span, children));
            }
            children.push(self.parse_expr(token)?);
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
