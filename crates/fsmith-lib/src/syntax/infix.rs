//! Infix to postfix translation (shunting-yard).
//!
//! Precedence, loosest first: `|`, concatenation (explicit `.` or
//! juxtaposition), postfix `* + ?`. Binary operators are left-associative.
//! Postfix operators bind to the operand just emitted, so they go straight
//! to the output.
//!
//! Every error the core builder could hit is caught here with a source span,
//! so a successful translation always compiles to exactly one fragment.

use std::ops::Range;

use super::lexer::{LexKind, Lexeme, lex};
use super::{SyntaxError, Token};

/// Operator stack entry.
#[derive(Debug, Clone)]
enum Pending {
    Group { span: Range<usize> },
    Binary { token: Token },
}

fn precedence(token: Token) -> u8 {
    match token {
        Token::Union => 1,
        Token::Concat => 2,
        _ => 3,
    }
}

struct ShuntingYard<'s> {
    source: &'s str,
    output: Vec<Token>,
    stack: Vec<Pending>,
    /// True when the next lexeme must start an operand.
    expect_operand: bool,
    prev: Option<Lexeme>,
}

impl<'s> ShuntingYard<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            source,
            output: Vec::new(),
            stack: Vec::new(),
            expect_operand: true,
            prev: None,
        }
    }

    fn push_binary(&mut self, token: Token) {
        while let Some(Pending::Binary { token: top }) = self.stack.last() {
            if precedence(*top) < precedence(token) {
                break;
            }
            self.output.push(*top);
            self.stack.pop();
        }
        self.stack.push(Pending::Binary { token });
    }

    /// Juxtaposition: an operand right after an operand.
    fn implicit_concat(&mut self) {
        if !self.expect_operand {
            self.push_binary(Token::Concat);
        }
    }

    /// Error for an operand that never arrived, blamed on what preceded it.
    fn missing_operand(&self, at: &Lexeme) -> SyntaxError {
        match &self.prev {
            Some(prev) if prev.kind == LexKind::ParenOpen && at.kind == LexKind::ParenClose => {
                SyntaxError::EmptyGroup {
                    span: prev.span.start..at.span.end,
                }
            }
            Some(prev) if matches!(prev.kind, LexKind::Pipe | LexKind::Dot) => {
                SyntaxError::MissingOperand {
                    op: prev.first_char(self.source),
                    span: prev.span.clone(),
                }
            }
            _ => SyntaxError::MissingOperand {
                op: at.first_char(self.source),
                span: at.span.clone(),
            },
        }
    }

    fn feed(&mut self, lexeme: Lexeme) -> Result<(), SyntaxError> {
        match lexeme.kind {
            LexKind::Literal | LexKind::Escape => {
                self.implicit_concat();
                if let Some(c) = lexeme.literal(self.source) {
                    self.output.push(Token::Literal(c));
                }
                self.expect_operand = false;
            }
            LexKind::ParenOpen => {
                self.implicit_concat();
                self.stack.push(Pending::Group {
                    span: lexeme.span.clone(),
                });
                self.expect_operand = true;
            }
            LexKind::ParenClose => {
                if !self.stack.iter().any(|p| matches!(p, Pending::Group { .. })) {
                    return Err(SyntaxError::UnopenedGroup { span: lexeme.span });
                }
                if self.expect_operand {
                    return Err(self.missing_operand(&lexeme));
                }
                while let Some(pending) = self.stack.pop() {
                    match pending {
                        Pending::Group { .. } => break,
                        Pending::Binary { token } => self.output.push(token),
                    }
                }
                self.expect_operand = false;
            }
            LexKind::Pipe | LexKind::Dot => {
                if self.expect_operand {
                    return Err(self.missing_operand(&lexeme));
                }
                let token = if lexeme.kind == LexKind::Pipe {
                    Token::Union
                } else {
                    Token::Concat
                };
                self.push_binary(token);
                self.expect_operand = true;
            }
            LexKind::Star | LexKind::Plus | LexKind::Question => {
                if self.expect_operand {
                    return Err(SyntaxError::MissingOperand {
                        op: lexeme.first_char(self.source),
                        span: lexeme.span,
                    });
                }
                let token = match lexeme.kind {
                    LexKind::Star => Token::Star,
                    LexKind::Plus => Token::Plus,
                    _ => Token::Optional,
                };
                self.output.push(token);
            }
            LexKind::Backslash => {
                return Err(SyntaxError::TrailingEscape { span: lexeme.span });
            }
            LexKind::Garbage => {
                return Err(SyntaxError::UnexpectedChar {
                    ch: lexeme.first_char(self.source),
                    span: lexeme.span,
                });
            }
            LexKind::Whitespace => return Ok(()),
        }
        self.prev = Some(lexeme);
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<Token>, SyntaxError> {
        let Some(last) = self.prev.take() else {
            return Ok(self.output);
        };

        if self.expect_operand {
            return Err(match last.kind {
                LexKind::ParenOpen => SyntaxError::UnclosedGroup { span: last.span },
                _ => SyntaxError::MissingOperand {
                    op: last.first_char(self.source),
                    span: last.span,
                },
            });
        }

        while let Some(pending) = self.stack.pop() {
            match pending {
                Pending::Group { span } => return Err(SyntaxError::UnclosedGroup { span }),
                Pending::Binary { token } => self.output.push(token),
            }
        }

        Ok(self.output)
    }
}

/// Translate an infix expression into postfix tokens.
///
/// Empty or whitespace-only input yields no tokens.
pub fn to_postfix(infix: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut yard = ShuntingYard::new(infix);
    for lexeme in lex(infix) {
        yard.feed(lexeme)?;
    }
    yard.finish()
}
