// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! The lexer implementation using logos.

use logos::Logos;
use monkey_ast::{Span, Token, TokenKind};

/// Raw token type for logos - identifiers are mapped to keywords in a second pass.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    #[token("==")]
    Eq,
    #[token("!=")]
    NotEq,
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("!")]
    Bang,
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    #[regex(r"[0-9]+")]
    Int,

    #[token("\"", scan_string)]
    StringTok(String),

    // Identifiers, checked against the keyword set in `convert_token`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Scans a quoted string literal with no escape-sequence interpretation.
/// An unterminated string (no closing quote before EOF) consumes the rest
/// of the input rather than failing the lex.
fn scan_string(lexer: &mut logos::Lexer<RawToken>) -> String {
    let remainder = lexer.remainder();
    match remainder.find('"') {
        Some(end) => {
            let s = remainder[..end].to_string();
            lexer.bump(end + 1);
            s
        }
        None => {
            let s = remainder.to_string();
            lexer.bump(remainder.len());
            s
        }
    }
}

fn lookup_keyword(ident: &str) -> Option<TokenKind> {
    match ident {
        "fn" => Some(TokenKind::Function),
        "let" => Some(TokenKind::Let),
        "true" => Some(TokenKind::True),
        "false" => Some(TokenKind::False),
        "if" => Some(TokenKind::If),
        "else" => Some(TokenKind::Else),
        "return" => Some(TokenKind::Return),
        _ => None,
    }
}

/// A pull-based lexer for Monkey source code.
///
/// Wraps a [`logos`] token stream (itself pull-based) and emits one
/// [`Token`] per call to [`Lexer::next_token`], returning an unending
/// stream of `Eof` tokens once the source is exhausted.
pub struct Lexer<'a> {
    source: &'a str,
    inner: logos::Lexer<'a, RawToken>,
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self { source, inner: RawToken::lexer(source), done: false }
    }

    /// Pull the next token from the source, or `Eof` forever once exhausted.
    pub fn next_token(&mut self) -> Token {
        if self.done {
            let end = self.source.len();
            return Token::new(TokenKind::Eof, "", Span::new(end, end));
        }

        let Some(result) = self.inner.next() else {
            self.done = true;
            let end = self.source.len();
            return Token::new(TokenKind::Eof, "", Span::new(end, end));
        };

        let span = self.inner.span();
        let slice = self.inner.slice();

        match result {
            Ok(raw) => {
                let (kind, literal) = self.convert_token(raw, slice);
                Token::new(kind, literal, Span::new(span.start, span.end))
            }
            Err(()) => Token::new(TokenKind::Illegal, slice, Span::new(span.start, span.end)),
        }
    }

    fn convert_token(&self, raw: RawToken, slice: &str) -> (TokenKind, String) {
        match raw {
            RawToken::Eq => (TokenKind::Eq, "==".to_string()),
            RawToken::NotEq => (TokenKind::NotEq, "!=".to_string()),
            RawToken::Assign => (TokenKind::Assign, "=".to_string()),
            RawToken::Plus => (TokenKind::Plus, "+".to_string()),
            RawToken::Minus => (TokenKind::Minus, "-".to_string()),
            RawToken::Bang => (TokenKind::Bang, "!".to_string()),
            RawToken::Asterisk => (TokenKind::Asterisk, "*".to_string()),
            RawToken::Slash => (TokenKind::Slash, "/".to_string()),
            RawToken::Lt => (TokenKind::Lt, "<".to_string()),
            RawToken::Gt => (TokenKind::Gt, ">".to_string()),
            RawToken::Comma => (TokenKind::Comma, ",".to_string()),
            RawToken::Semicolon => (TokenKind::Semicolon, ";".to_string()),
            RawToken::Colon => (TokenKind::Colon, ":".to_string()),
            RawToken::LParen => (TokenKind::LParen, "(".to_string()),
            RawToken::RParen => (TokenKind::RParen, ")".to_string()),
            RawToken::LBrace => (TokenKind::LBrace, "{".to_string()),
            RawToken::RBrace => (TokenKind::RBrace, "}".to_string()),
            RawToken::LBracket => (TokenKind::LBracket, "[".to_string()),
            RawToken::RBracket => (TokenKind::RBracket, "]".to_string()),
            RawToken::Int => (TokenKind::Int, slice.to_string()),
            RawToken::StringTok(s) => (TokenKind::String, s),
            RawToken::Ident => match lookup_keyword(slice) {
                Some(kind) => (kind, slice.to_string()),
                None => (TokenKind::Ident, slice.to_string()),
            },
        }
    }
}
