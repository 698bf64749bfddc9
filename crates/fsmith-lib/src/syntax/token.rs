//! Postfix token stream consumed by the Thompson builder.

use std::fmt;

use super::SyntaxError;

/// A single postfix token: a literal symbol or an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Literal(char),
    /// `.`
    Concat,
    /// `|`
    Union,
    /// `*`
    Star,
    /// `+`
    Plus,
    /// `?`
    Optional,
}

impl Token {
    /// Operator for an operator character, `None` for anything else.
    pub fn operator(c: char) -> Option<Self> {
        match c {
            '.' => Some(Token::Concat),
            '|' => Some(Token::Union),
            '*' => Some(Token::Star),
            '+' => Some(Token::Plus),
            '?' => Some(Token::Optional),
            _ => None,
        }
    }

    /// Number of fragments the token pops off the builder stack.
    pub fn arity(self) -> usize {
        match self {
            Token::Literal(_) => 0,
            Token::Star | Token::Plus | Token::Optional => 1,
            Token::Concat | Token::Union => 2,
        }
    }

    pub fn is_operator(self) -> bool {
        !matches!(self, Token::Literal(_))
    }
}

/// Characters that must be escaped to be read back as literals.
fn needs_escape(c: char) -> bool {
    Token::operator(c).is_some() || matches!(c, '\\' | '(' | ')') || c.is_whitespace()
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Token::Literal(c) if needs_escape(c) => write!(f, "\\{c}"),
            Token::Literal(c) => write!(f, "{c}"),
            Token::Concat => f.write_str("."),
            Token::Union => f.write_str("|"),
            Token::Star => f.write_str("*"),
            Token::Plus => f.write_str("+"),
            Token::Optional => f.write_str("?"),
        }
    }
}

/// Split postfix text into tokens.
///
/// Every non-whitespace character is one token. `\` makes the next
/// character a literal, whitespace included.
pub fn parse_postfix(text: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens = Vec::with_capacity(text.len());
    let mut chars = text.char_indices();

    while let Some((offset, c)) = chars.next() {
        if c == '\\' {
            let Some((_, escaped)) = chars.next() else {
                return Err(SyntaxError::TrailingEscape {
                    span: offset..offset + 1,
                });
            };
            tokens.push(Token::Literal(escaped));
            continue;
        }
        if c.is_whitespace() {
            continue;
        }
        tokens.push(Token::operator(c).unwrap_or(Token::Literal(c)));
    }

    Ok(tokens)
}

/// Render tokens back into postfix text that `parse_postfix` reads unchanged.
pub fn postfix_string(tokens: &[Token]) -> String {
    tokens.iter().map(Token::to_string).collect()
}
