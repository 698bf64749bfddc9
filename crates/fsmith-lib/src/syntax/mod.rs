//! Expression text front ends.
//!
//! - `token`: the postfix token stream the Thompson builder consumes
//! - `lexer` + `infix`: shunting-yard translation from infix text
//! - `error`: span-carrying syntax errors and their rendering

mod error;
mod infix;
pub mod lexer;
mod token;

#[cfg(test)]
mod error_tests;
#[cfg(test)]
mod token_tests;

pub use error::SyntaxError;
pub use infix::to_postfix;
pub use token::{Token, parse_postfix, postfix_string};
