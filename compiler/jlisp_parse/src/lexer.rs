//! Tokenizer built on `logos`.

use logos::Logos;

use crate::{ParseError, ParseErrorKind, Span};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    #[regex(r"-?[0-9]+")]
    Number,

    // Symbols may contain digits but never start with a digit run: `5abc`
    // lexes as `5` then `abc`, and `1-2` as `1` then `-2`.
    #[regex(r"[a-zA-Z_+*^/\\=<>!&%][a-zA-Z0-9_+\-*^/\\=<>!&%]*")]
    #[regex(r"-([a-zA-Z_+\-*^/\\=<>!&%][a-zA-Z0-9_+\-*^/\\=<>!&%]*)?")]
    Symbol,
}

impl TokenKind {
    /// Closing bracket matching an opening one.
    pub fn closer(self) -> Option<char> {
        match self {
            TokenKind::LParen => Some(')'),
            TokenKind::LBrace => Some('}'),
            _ => None,
        }
    }

    /// The bracket character, if this is a bracket token.
    pub fn bracket(self) -> Option<char> {
        match self {
            TokenKind::LParen => Some('('),
            TokenKind::RParen => Some(')'),
            TokenKind::LBrace => Some('{'),
            TokenKind::RBrace => Some('}'),
            TokenKind::Number | TokenKind::Symbol => None,
        }
    }

    #[inline]
    pub fn is_close(self) -> bool {
        matches!(self, TokenKind::RParen | TokenKind::RBrace)
    }
}

/// A token with its source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
}

/// Split `source` into tokens.
pub fn lex<'src>(origin: &str, source: &'src str) -> Result<Vec<Token<'src>>, ParseError> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        let text = lexer.slice();
        match result {
            Ok(kind) => tokens.push(Token { kind, text, span }),
            Err(()) => {
                let found = text.chars().next().unwrap_or('\u{fffd}');
                return Err(ParseError::at(
                    origin,
                    source,
                    span,
                    ParseErrorKind::UnexpectedChar(found),
                ));
            }
        }
    }
    Ok(tokens)
}
