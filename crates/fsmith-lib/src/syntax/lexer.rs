//! Lexer for infix expressions.
//!
//! Produces span-based lexemes; literal values are sliced from the source on demand.
//!
//! ## Error handling
//!
//! Consecutive unrecognized characters are coalesced into one `Garbage` lexeme
//! so a run of junk yields a single diagnostic.

use logos::Logos;
use std::ops::Range;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexKind {
    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("|")]
    Pipe,

    /// Explicit concatenation.
    #[token(".")]
    Dot,

    #[token("*")]
    Star,

    #[token("+")]
    Plus,

    #[token("?")]
    Question,

    /// `\` followed by the character it makes literal.
    #[regex(r"\\(.|\n)")]
    Escape,

    /// `\` with nothing escapable after it.
    #[token("\\")]
    Backslash,

    #[regex(r"[\p{L}\p{N}]")]
    Literal,

    #[regex(r"\s+")]
    Whitespace,

    /// Coalesced unrecognized characters (not produced by logos directly).
    Garbage,
}

impl LexKind {
    pub fn is_trivia(self) -> bool {
        self == LexKind::Whitespace
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub kind: LexKind,
    pub span: Range<usize>,
}

impl Lexeme {
    pub fn new(kind: LexKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }

    /// First character of the lexeme's text.
    pub fn first_char(&self, source: &str) -> char {
        source[self.span.clone()].chars().next().unwrap_or('\u{fffd}')
    }

    /// Symbol denoted by a `Literal` or `Escape` lexeme.
    pub fn literal(&self, source: &str) -> Option<char> {
        let mut chars = source[self.span.clone()].chars();
        match self.kind {
            LexKind::Literal => chars.next(),
            LexKind::Escape => chars.nth(1),
            _ => None,
        }
    }
}

/// Tokenizes source into lexemes, trivia dropped.
pub fn lex(source: &str) -> Vec<Lexeme> {
    let mut lexemes = Vec::new();
    let mut lexer = LexKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    lexemes.push(Lexeme::new(LexKind::Garbage, start..lexer.span().start));
                }
                if !kind.is_trivia() {
                    lexemes.push(Lexeme::new(kind, lexer.span()));
                }
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    lexemes.push(Lexeme::new(LexKind::Garbage, start..source.len()));
                }
                break;
            }
        }
    }

    lexemes
}
